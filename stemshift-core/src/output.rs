use crate::executor::RenameRecord;

pub const SUCCESS_MESSAGE: &str = "Program executed successfully.";

/// Result of a completed shift run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResult {
    pub renames: Vec<RenameRecord>,
}

/// Closing text printed once every file has been renamed
pub fn format_summary() -> String {
    format!("\n{SUCCESS_MESSAGE}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_preceded_by_blank_line() {
        assert_eq!(format_summary(), "\nProgram executed successfully.\n");
    }
}
