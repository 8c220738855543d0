// src/args.rs
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use zx_tablegen_infra::Source;

use crate::parsers::parse_indent;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "zx-tablegen",
    version = crate::VERSION,
    about = "GS1 AI 長さ表と zx_iswgraph() の Unicode 表を生成する",
    long_about = "Generates C++ table literals for copy/paste into the barcode library sources.\n\
                  Output goes to stdout; diagnostics go to stderr."
)]
pub struct Args {
    /// ログを詳しく出す (-v: info, -vv: debug)。RUST_LOG が優先
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit `aiInfos[]` from the GS1 Barcode Syntax Dictionary
    AiInfos(AiInfosArgs),
    /// Emit the `zx_iswgraph()` tables from UnicodeData.txt
    Iswgraph(IswgraphArgs),
}

#[derive(clap::Args, Debug)]
pub struct AiInfosArgs {
    /// Dictionary file, URL or `-` for stdin (default: latest tagged release)
    #[arg(short, long, value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub file: Option<Source>,

    /// Indent before each entry; `\t` is a tab
    #[arg(short, long, value_name = "INDENT", value_parser = parse_indent)]
    pub tab: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct IswgraphArgs {
    /// Local copy of UnicodeData.txt, URL or `-` for stdin
    #[arg(short, long, value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub file: Option<Source>,
}
