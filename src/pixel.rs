use bytemuck::{Pod, Zeroable};

/// One RGBA8 pixel, laid out the way `Rgba8Unorm` textures expect.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Self = Pixel::grey(0);

    pub const fn grey(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
            a: u8::MAX,
        }
    }
}
