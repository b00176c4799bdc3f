use palette::{IntoColor, Srgb, Xyz};

/// Fill colors for the wheel's segments, in order. Wheels with more segments than this
/// start over from the first color.
pub const SEGMENT_COLORS: [(u8, u8, u8); 12] = [
  (0x3f, 0x29, 0x7e),
  (0x17, 0x5f, 0xa9),
  (0x16, 0x9e, 0xd8),
  (0x23, 0x9b, 0x63),
  (0x64, 0xb0, 0x31),
  (0xef, 0xe6, 0x1f),
  (0xf7, 0xa4, 0x16),
  (0xe6, 0x47, 0x1d),
  (0xdc, 0x09, 0x36),
  (0xe5, 0x17, 0x7b),
  (0xbe, 0x11, 0x80),
  (0x87, 0x1f, 0x7f),
];

pub fn segment_color(index: usize) -> Srgb<u8> {
  let (r, g, b) = SEGMENT_COLORS[index % SEGMENT_COLORS.len()];
  Srgb::new(r, g, b)
}

/// Returns a legible text color for the given background color.
///
/// Returns white for "dark" colors (luminance < 0.5) and black for "bright" colors.
pub fn text_color_for_bgcolor(bg: Srgb<u8>) -> Srgb<u8> {
  let xyz: Xyz = bg.into_format::<f32>().into_color();
  if xyz.y < 0.5 {
    Srgb::new(0xff, 0xff, 0xff)
  } else {
    Srgb::new(0, 0, 0)
  }
}

pub trait ToHexColorStr {
  fn to_hex_color(&self) -> String;
}

impl ToHexColorStr for Srgb<u8> {
  fn to_hex_color(&self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
  }
}

#[cfg(test)]
mod tests {
  use palette::Srgb;

  use super::{segment_color, text_color_for_bgcolor, ToHexColorStr};

  #[test]
  fn hex_strings_are_zero_padded() {
    assert_eq!(segment_color(0).to_hex_color(), "#3f297e");
    assert_eq!(segment_color(8).to_hex_color(), "#dc0936");
    assert_eq!(segment_color(20).to_hex_color(), segment_color(8).to_hex_color());
  }

  #[test]
  fn dark_fills_get_white_text_and_bright_fills_get_black() {
    let white = Srgb::new(0xff, 0xff, 0xff);
    let black = Srgb::new(0, 0, 0);
    assert_eq!(text_color_for_bgcolor(segment_color(0)), white);
    assert_eq!(text_color_for_bgcolor(segment_color(5)), black);
    assert_eq!(text_color_for_bgcolor(Srgb::new(0xff, 0xff, 0xff)), black);
  }
}
