//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for headers
//! - **Standardized spacing**: Newline before and after command output
//! - **Prompts on stdout**: Confirmation questions are printed without a newline

use colored::*;
use std::io::{self, BufRead, Write};

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Ask a yes/no question on `output` and read the answer from `input`.
///
/// Only `y` and `yes` (any case) count as yes. End of input is no.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{} {} ", question.yellow(), "[y/N]".bright_black())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Categories");
    }

    #[test]
    fn test_confirm_accepts_yes() -> io::Result<()> {
        for answer in ["y\n", "Y\n", "yes\n", "  YES  \n"] {
            let mut output = Vec::new();
            assert!(confirm("Delete?", &mut Cursor::new(answer), &mut output)?);
        }
        Ok(())
    }

    #[test]
    fn test_confirm_defaults_to_no() -> io::Result<()> {
        for answer in ["\n", "n\n", "nope\n", ""] {
            let mut output = Vec::new();
            assert!(!confirm("Delete?", &mut Cursor::new(answer), &mut output)?);
        }
        Ok(())
    }

    #[test]
    fn test_confirm_prints_question() -> io::Result<()> {
        let mut output = Vec::new();
        confirm("Delete \"Lamp\"?", &mut Cursor::new("n\n"), &mut output)?;
        let printed = crate::core::templates::strip_ansi_codes(&String::from_utf8_lossy(&output));
        assert_eq!(printed, "Delete \"Lamp\"? [y/N] ");
        Ok(())
    }
}
