//! Render a few values the way a kernel would for one notebook cell.
//!
//! Prints each bundle as the JSON a frontend would receive, with dispatch
//! decisions logged at debug level.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example notebook_cell -p richdisplay
//! ```

use richdisplay::prelude::*;
use tracing_subscriber::filter::LevelFilter;

struct Greeting {
    name: String,
}

impl Html for Greeting {
    fn html(&self) -> String {
        format!("<h3>Hello, <em>{}</em></h3>", self.name)
    }
}

impl Markdown for Greeting {
    fn markdown(&self) -> String {
        format!("### Hello, *{}*", self.name)
    }
}

impl Renderable for Greeting {
    fn plain_text(&self) -> String {
        format!("Hello, {}", self.name)
    }

    fn as_html(&self) -> Option<&dyn Html> {
        Some(self)
    }

    fn as_markdown(&self) -> Option<&dyn Markdown> {
        Some(self)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let dispatcher = Dispatcher::new();
    let greeting = Greeting {
        name: "notebook".into(),
    };

    let cell = [
        dispatcher.render(&greeting),
        dispatcher.render(&b"%PDF-1.7\n".to_vec()),
        dispatcher.render_results(&[&1_u8, &"two"]),
        builders::math("\\int_0^1 x\\,dx"),
        or_error_bundle(builders::file(None, "missing.png")),
    ];

    for bundle in &cell {
        println!("{}", serde_json::to_string_pretty(bundle)?);
    }
    Ok(())
}
