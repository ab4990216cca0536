use std::io;

use font_converter::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    process_args(args)?;
    log::info!("字型轉換器已關閉");
    Ok(())
}
