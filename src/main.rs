// SPDX-License-Identifier: MPL-2.0
use toast_surface::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Usage: toast_surface [--config-dir <DIR>] [--lifetime-ms <MS>]");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        lifetime_ms: args.opt_value_from_str("--lifetime-ms")?,
    })
}
