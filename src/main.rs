use clap::Parser;
use mobotray::cli::Args;
use mobotray::{init_logging, layout_listing, run, TrayConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs)?;

    if args.list_layouts {
        let mut config = TrayConfig::read_or_default(args.config.as_deref())?;
        args.overlay(&mut config);
        for line in layout_listing(&config)? {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut config = TrayConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config)?;

    info!("mobotray {} (built {})", mobotray::VERSION, mobotray::BUILD_DATE);
    let summary = run(&config)?;

    println!(
        "Wrote {} x {} mm tray with {} screw holes to {}",
        summary.size.x,
        summary.size.y,
        summary.hole_count,
        summary.output_path.display()
    );
    Ok(())
}
