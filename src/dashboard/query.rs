use crate::Feature;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Check that the API is up", alias = "h")]
    Health,
    #[command(about = "Describe every column of the stored table", alias = "a")]
    Analyze,
    #[command(about = "Count the rows in the stored table", alias = "db")]
    Info,
    #[command(
        about = "Classify a flower; missing measurements are prompted for",
        alias = "p",
        allow_negative_numbers = true
    )]
    Predict {
        sepal_length: Option<Feature>,
        sepal_width: Option<Feature>,
        petal_length: Option<Feature>,
        petal_width: Option<Feature>,
    },
}

impl Query {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
}
