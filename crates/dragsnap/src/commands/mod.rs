pub mod config;
pub mod debug;
pub mod init;
pub mod run;

/// Exits with an error on platforms without a desktop backend.
#[cfg(not(windows))]
pub fn windows_only(command: &str) -> ! {
    eprintln!("Error: `dragsnap {command}` is only available on Windows.");
    std::process::exit(1);
}
