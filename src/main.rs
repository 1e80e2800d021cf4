/// Native preview entry point: renders a curved scrollbar to SVG
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use clap::Parser;
    use folio::config::WidgetConfig;
    use folio::logging::init_logging;
    use folio::preview::render_svg;
    use folio::scrollbar::{ContainerMetrics, ContentMetrics};

    /// Render a curved scrollbar for a container of the given size.
    #[derive(Debug, Parser)]
    #[command(name = "folio-preview", version)]
    struct Args {
        /// Container width in pixels
        #[arg(long, default_value_t = 400.0)]
        width: f64,
        /// Container height in pixels
        #[arg(long, default_value_t = 300.0)]
        height: f64,
        /// Container border radius in pixels
        #[arg(long, default_value_t = 24.0)]
        radius: f64,
        /// Total content height (scrollHeight)
        #[arg(long, default_value_t = 1200.0)]
        content_height: f64,
        /// Current scroll offset of the content
        #[arg(long, default_value_t = 0.0)]
        scroll_top: f64,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the SVG here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    }

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match WidgetConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => WidgetConfig::default(),
    };
    init_logging(config.log_level);

    let svg = render_svg(
        ContainerMetrics {
            width: args.width,
            height: args.height,
            border_radius: args.radius,
        },
        ContentMetrics {
            client_height: args.height,
            scroll_height: args.content_height,
            scroll_top: args.scroll_top,
        },
        config.scrollbar,
    );

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, svg) {
                eprintln!("Failed to write {:?}: {}", path, e);
                std::process::exit(1);
            }
            log::info!("Wrote preview to {:?}", path);
        }
        None => print!("{}", svg),
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
