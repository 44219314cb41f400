use regex::Regex;
use vfxops_core::{ConfigError, FrameNaming};

/// Compiled frame file name matcher. The whole name must match: prefix,
/// exactly `padding` ASCII digits, extension, end.
#[derive(Clone, Debug)]
pub struct FramePattern {
    re: Regex,
}

impl FramePattern {
    pub fn new(naming: &FrameNaming) -> Result<Self, ConfigError> {
        naming.validate()?;
        let src = format!(
            "^{}([0-9]{{{}}}){}$",
            regex::escape(&naming.frame_prefix),
            naming.frame_padding,
            regex::escape(&naming.frame_ext)
        );
        let re = Regex::new(&src).map_err(|e| ConfigError::Malformed {
            path: "naming".into(),
            message: e.to_string(),
        })?;
        Ok(Self { re })
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.re.is_match(file_name)
    }

    /// Frame number of a matching name. `None` for non-matching names and for
    /// digit groups too long to fit a `u64`.
    pub fn frame_number(&self, file_name: &str) -> Option<u64> {
        let caps = self.re.captures(file_name)?;
        match caps[1].parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!(file_name, "frame number out of range, skipping");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> FramePattern {
        FramePattern::new(&FrameNaming::new("frame_", 4, ".exr")).unwrap()
    }

    #[test]
    fn matches_expected_names() {
        let p = pattern();
        assert_eq!(p.frame_number("frame_0001.exr"), Some(1));
        assert_eq!(p.frame_number("frame_1234.exr"), Some(1234));
    }

    #[test]
    fn rejects_near_misses() {
        let p = pattern();
        // wrong prefix
        assert!(!p.is_match("frm_0001.exr"));
        // wrong padding
        assert!(!p.is_match("frame_001.exr"));
        assert!(!p.is_match("frame_00001.exr"));
        // wrong ext
        assert!(!p.is_match("frame_0001.png"));
        assert!(!p.is_match("frame_0001.EXR"));
        // trailing or leading junk
        assert!(!p.is_match("frame_0001.exr.bak"));
        assert!(!p.is_match("old_frame_0001.exr"));
    }

    #[test]
    fn prefix_and_extension_are_literal() {
        let p = FramePattern::new(&FrameNaming::new("shot.v1+", 3, ".exr")).unwrap();
        assert_eq!(p.frame_number("shot.v1+007.exr"), Some(7));
        assert!(!p.is_match("shotXv1+007.exr"));
        assert!(!p.is_match("shot.v1+007Xexr"));
    }

    #[test]
    fn non_ascii_digits_are_not_frames() {
        let p = pattern();
        assert!(!p.is_match("frame_\u{0661}\u{0662}\u{0663}\u{0664}.exr"));
    }

    #[test]
    fn overflowing_frame_number_is_skipped() {
        let p = FramePattern::new(&FrameNaming::new("f", 30, ".exr")).unwrap();
        let name = format!("f{}.exr", "9".repeat(30));
        assert!(p.is_match(&name));
        assert_eq!(p.frame_number(&name), None);
    }

    #[test]
    fn zero_padding_is_a_config_error() {
        let err = FramePattern::new(&FrameNaming::new("f", 0, ".exr")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPadding(0)));
    }
}
