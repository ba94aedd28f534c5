use palette::{Srgb, Srgba};

/// Paint colours for the disc ring and the tonearm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub ring: Srgba<f64>,
    pub arm: Srgba<f64>,
    pub hub: Srgba<f64>,
}

impl Colors {
    pub fn opaque(color: Srgb<u8>) -> Srgba<f64> {
        let c: Srgb<f64> = color.into_format();
        Srgba::new(c.red, c.green, c.blue, 1.0)
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            ring: Self::opaque(Srgb::new(0x00, 0x00, 0x00)),
            arm: Self::opaque(Srgb::new(0xC0, 0xC0, 0xC0)),
            hub: Self::opaque(Srgb::new(0x8A, 0x8A, 0x8A)),
        }
    }
}
