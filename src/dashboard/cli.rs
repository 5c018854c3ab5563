use super::Client;
use super::Query;
use super::describe_table;
use super::prediction_table;
use crate::Feature;
use crate::N_FEATURES;
use crate::dto::PredictRequest;
use colored::Colorize;
use dialoguer::Input;
use std::io::Write;

/// Form defaults for measurements not given on the command line.
const DEFAULTS: [Feature; N_FEATURES] = [5.1, 3.5, 1.4, 0.2];

pub struct CLI(Client);

impl CLI {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        Ok(Self(Client::new(base)?))
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        log::info!("dashboard connected to {}", self.0.base());
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match self.handle(line).await {
                    Err(e) => eprintln!("{} {:#}", "error:".red(), e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    async fn handle(&self, input: &str) -> anyhow::Result<()> {
        match Query::parse_line(input)? {
            Query::Health => Ok(println!("{}", serde_json::to_string(&self.0.health().await?)?)),
            Query::Analyze => Ok(println!("{}", describe_table(&self.0.analyze().await?))),
            Query::Info => {
                let info = self.0.db_info().await?;
                Ok(println!("table {} has {} rows", info.table.bold(), info.rows))
            }
            Query::Predict {
                sepal_length,
                sepal_width,
                petal_length,
                petal_width,
            } => {
                let given = [sepal_length, sepal_width, petal_length, petal_width];
                let features = Self::prompt(given)?;
                let prediction = self.0.predict(PredictRequest::from(features)).await?;
                Ok(println!("{}", prediction_table(&prediction)))
            }
        }
    }

    fn prompt(given: [Option<Feature>; N_FEATURES]) -> anyhow::Result<[Feature; N_FEATURES]> {
        let mut features = DEFAULTS;
        for (i, value) in given.iter().enumerate() {
            features[i] = match value {
                Some(x) => *x,
                None => Input::<Feature>::new()
                    .with_prompt(crate::FEATURES[i])
                    .default(DEFAULTS[i])
                    .interact_text()?,
            };
        }
        Ok(features)
    }
}

/// Connect to the API and start the REPL.
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "API_BASE", default_value = crate::DEFAULT_API_BASE)]
    api: String,
}

impl Args {
    pub async fn run(&self) -> anyhow::Result<()> {
        CLI::new(&self.api)?.run().await
    }
}
