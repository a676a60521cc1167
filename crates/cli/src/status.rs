//! Styled status lines for terminal output.

use std::fmt::Display;

use console::style;

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusReporter {
    use_colors: bool,
}

impl StatusReporter {
    pub(crate) fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub(crate) fn report<T: Display>(&self, message: T) {
        println!("{message}");
    }

    pub(crate) fn report_success<T: Display>(&self, message: T) {
        if self.use_colors {
            println!("{} {message}", style("✓").green());
        } else {
            println!("✓ {message}");
        }
    }

    pub(crate) fn report_warning<T: Display>(&self, message: T) {
        if self.use_colors {
            eprintln!("{} {message}", style("!").yellow().bold());
        } else {
            eprintln!("! {message}");
        }
    }

    pub(crate) fn report_error<T: Display>(&self, message: T) {
        if self.use_colors {
            eprintln!("{} {message}", style("✗").red().bold());
        } else {
            eprintln!("✗ {message}");
        }
    }
}
