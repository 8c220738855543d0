// src/config.rs
use derive_builder::Builder;
use zx_tablegen_core::data::unicode::UNICODE_DATA_URL;
use zx_tablegen_infra::Source;

use crate::args::{AiInfosArgs, Command, IswgraphArgs};

pub const DEFAULT_INDENT: &str = "\t";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct AiInfosConfig {
    /// `None` resolves the latest tagged release of the dictionary.
    #[builder(default)]
    pub source: Option<Source>,
    #[builder(default = "DEFAULT_INDENT.to_string()")]
    pub indent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct IswgraphConfig {
    #[builder(default = "Source::Url(UNICODE_DATA_URL.to_string())")]
    pub source: Source,
}

/// One generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunConfig {
    AiInfos(AiInfosConfig),
    Iswgraph(IswgraphConfig),
}

impl TryFrom<AiInfosArgs> for AiInfosConfig {
    type Error = AiInfosConfigBuilderError;

    fn try_from(args: AiInfosArgs) -> Result<Self, Self::Error> {
        let mut builder = AiInfosConfigBuilder::default();
        builder.source(args.file);
        if let Some(indent) = args.tab {
            builder.indent(indent);
        }
        builder.build()
    }
}

impl TryFrom<IswgraphArgs> for IswgraphConfig {
    type Error = IswgraphConfigBuilderError;

    fn try_from(args: IswgraphArgs) -> Result<Self, Self::Error> {
        let mut builder = IswgraphConfigBuilder::default();
        if let Some(source) = args.file {
            builder.source(source);
        }
        builder.build()
    }
}

impl TryFrom<Command> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(command: Command) -> anyhow::Result<Self> {
        Ok(match command {
            Command::AiInfos(args) => Self::AiInfos(args.try_into()?),
            Command::Iswgraph(args) => Self::Iswgraph(args.try_into()?),
        })
    }
}
