use clap::{crate_name, crate_version, crate_description};

// APP information
pub const CRATE_BIN_NAME: &str = "amabridge";

pub fn show_banner_with_starttime() {
    println!("{} v{}", crate_name!(), crate_version!());
    println!("{}", crate_description!());
    println!();
    println!("Starting at {}", crate::time::get_sysdate());
    println!();
}

pub fn exit_with_error_message(message: &str) -> ! {
    eprintln!();
    eprintln!("Error: {}", message);
    eprintln!("'{} --help' for more information.", CRATE_BIN_NAME);
    std::process::exit(1);
}
