/// Glyphs prefixed to the progress lines printed while scaffolding.
pub mod glyph {
    pub const ROCKET: &str = "🚀";
    pub const TOOLS: &str = "🛠";
    pub const FOLDER: &str = "📂";
    pub const CHECK: &str = "✅";
    pub const PACKAGE: &str = "📦";
    pub const CROSS: &str = "❌";
    pub const WARNING: &str = "⚠";
}

#[macro_export]
macro_rules! error {
    ($single:expr) => {
        {
            use owo_colors::OwoColorize;

            eprintln!(
                "{} {}: {}",
                $crate::log::glyph::CROSS,
                "error".if_supports_color(owo_colors::Stream::Stderr, |s| s
                        .style(owo_colors::Style::new().bold().red())),
                format_args!("{}", $single)
            );
        }
    };
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            eprintln!(
                "{} {}: {}",
                $crate::log::glyph::CROSS,
                "error".if_supports_color(owo_colors::Stream::Stderr, |s| s
                        .style(owo_colors::Style::new().bold().red())),
                format_args!($($arg)*)
            );
        }
    }
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{}: {}",
                "info".if_supports_color(owo_colors::Stream::Stdout, |s| s
                        .style(owo_colors::Style::new().bold().green())),
                format_args!($($arg)*)
            );
        }
    }
}

#[macro_export]
macro_rules! warn {
    ($single:expr) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{} {}: {}",
                $crate::log::glyph::WARNING,
                "warning".if_supports_color(owo_colors::Stream::Stdout, |s| s
                        .style(owo_colors::Style::new().bold().yellow())),
                format_args!("{}", $single)
            );
        }
    };
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{} {}: {}",
                $crate::log::glyph::WARNING,
                "warning".if_supports_color(owo_colors::Stream::Stdout, |s| s
                        .style(owo_colors::Style::new().bold().yellow())),
                format_args!($($arg)*)
            );
        }
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            if std::env::var("SPROUT_TRACE").is_ok() {
                println!(
                    "{}: {}",
                    "trace".if_supports_color(owo_colors::Stream::Stdout, |s| s
                            .style(owo_colors::Style::new().bold())),
                    format_args!($($arg)*)
                );
            }
        }
    }
}

/// Prints a progress line prefixed by one of the [`glyph`]s.
#[macro_export]
macro_rules! status {
    ($glyph:expr, $($arg:tt)+) => {
        println!("{} {}", $glyph, format_args!($($arg)*))
    };
}
