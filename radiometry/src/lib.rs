/// Real-valued RGB radiance and its quantization to display colors.
pub mod color;
