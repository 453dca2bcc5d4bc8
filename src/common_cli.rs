use crossterm::style::Stylize;

pub fn polkadots_info(msg: &str) {
    println!("{} {}", " [polkadots]".bold().cyan(), msg.cyan());
}

pub fn info(msg: &str) {
    println!("{} {}", "      [info]".bold().cyan(), msg.cyan());
}
pub fn step(msg: &str) {
    println!("{} {}", "      [step]".bold().blue(), msg);
}
pub fn warn(msg: &str) {
    println!("{} {}", "      [warn]".bold().yellow(), msg.yellow());
}
pub fn error(msg: &str) {
    println!("{} {}", "     [error]".bold().red(), msg.red());
}
pub fn success(msg: &str) {
    println!("{} {}", "   [success]".bold().green(), msg.green());
}

#[macro_export]
macro_rules! polkadots_info {
    ($($arg:tt)*) => {
        $crate::common_cli::polkadots_info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::common_cli::info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! step {
    ($($arg:tt)*) => {
        $crate::common_cli::step(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::common_cli::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::common_cli::error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::common_cli::success(&format!($($arg)*))
    };
}
