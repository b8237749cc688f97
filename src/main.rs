use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use htmlnode::prelude::*;

#[derive(Parser)]
#[command(name = "htmlnode", version, about = "Build and render small HTML fragments")]
struct Cli {
    /// How self-closing elements are terminated
    #[arg(long, value_enum, global = true, default_value_t = VoidStyleArg::Compact)]
    void_style: VoidStyleArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the demonstration fragments, one per line
    Demo {
        /// Class of the wrapping div
        #[arg(long, default_value = "container")]
        class: String,
    },
    /// Render a JSON node tree read from FILE (or stdin)
    Render { file: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum VoidStyleArg {
    Compact,
    Spaced,
    Html5,
}

impl From<VoidStyleArg> for VoidStyle {
    fn from(arg: VoidStyleArg) -> Self {
        match arg {
            VoidStyleArg::Compact => VoidStyle::Compact,
            VoidStyleArg::Spaced => VoidStyle::Spaced,
            VoidStyleArg::Html5 => VoidStyle::Html5,
        }
    }
}

fn demo_fragments() -> Vec<Node> {
    vec![
        h1([text("Welcome!")]),
        p([
            text("This is a "),
            a([href("/link"), text("link")]),
            text(" example."),
        ]),
        button([type_("button"), class("btn"), text("Click me")]),
        input([
            id("id-text"),
            type_("text"),
            placeholder("Enter text..."),
            required(),
            value("hello"),
        ]),
        input([
            id("id-hidden"),
            type_("hidden"),
            value("hidden value"),
            disabled(),
        ]),
        img([src("/image.jpg"), alt("Example image")]),
    ]
}

fn read_tree(file: Option<PathBuf>) -> anyhow::Result<Node> {
    let input = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(Node::from_json(&input)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let renderer = Renderer::new(RenderConfig {
        void_style: cli.void_style.into(),
    });
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Demo { class: wrapper } => {
            for fragment in demo_fragments() {
                let mut container = div([class(wrapper.as_str())]);
                container.add([fragment]);
                renderer.render(&container, &mut out)?;
                writeln!(out)?;
            }
        }
        Command::Render { file } => {
            let tree = read_tree(file)?;
            debug!("Rendering tree: {:?}", tree);
            renderer.render(&tree, &mut out)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
