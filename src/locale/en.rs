use super::Messages;

/// English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Messages for English {
    fn min_len(&self, min_len: usize) -> String {
        format!("The string must have at least {min_len} characters.")
    }

    fn max_len(&self, max_len: usize) -> String {
        format!("The string must have at most {max_len} characters.")
    }

    fn no_options(&self) -> String {
        "There are no options to choose from.".into()
    }

    fn invalid_option(&self) -> String {
        "The option is not valid.".into()
    }

    fn file_not_found(&self) -> String {
        "The file does not exist.".into()
    }

    fn not_int(&self) -> String {
        "The value is not a valid integer.".into()
    }

    fn not_natural(&self) -> String {
        "The number must be a natural -> [0, inf)".into()
    }

    fn int_not_in_range(&self, min: i32, max: i32) -> String {
        format!("The number must be an integer in the range [{min}, {max}]")
    }

    fn not_float(&self) -> String {
        "The value is not a valid float.".into()
    }

    fn float_not_in_range(&self, min: f32, max: f32) -> String {
        format!("The number must be a float in the range [{min:.6}, {max:.6}]")
    }
}
