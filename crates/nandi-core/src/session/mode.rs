use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Channel the farmer is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Sms,
    Voice,
}

/// Renders elapsed call seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so long calls show e.g. `75:03`.
pub fn format_call_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_call_duration() {
        assert_eq!(format_call_duration(0), "00:00");
        assert_eq!(format_call_duration(9), "00:09");
        assert_eq!(format_call_duration(61), "01:01");
        assert_eq!(format_call_duration(4503), "75:03");
    }
}
