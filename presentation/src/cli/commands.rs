//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stylegen_domain::{FieldValue, FormField, FormKind, Quality, Resolution};

/// Output format for submission results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for stylegen
#[derive(Parser, Debug)]
#[command(name = "stylegen")]
#[command(author, version, about = "Submit image generation requests to an automation webhook")]
#[command(long_about = r#"
stylegen collects a form, validates it locally, and submits it as multipart
form data to an automation webhook that generates the images.

Two forms are available:
  style   Restyle one source image into several variations
  ad      Generate ad graphics from headline, copy and an optional photo

Results are either returned directly (preview / download links) or sent to
the email address on the form.

Configuration files are loaded from (in priority order):
1. STYLEGEN_* environment variables
2. --config <path>     Explicit config file
3. ./stylegen.toml     Project-level config
4. ~/.config/stylegen/config.toml   Global config

Example:
  stylegen style --email me@example.com --quality high --image cat.png
  stylegen style --email me@example.com --quality low --image-url https://example.com/cat.png -n 5
  stylegen ad --email me@example.com --headline "Ship faster" --sub-heading "..." \
      --pointers "..." --cta "Start free" --button-text "Try it" --resolution portrait
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Webhook URL to use instead of the configured one
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Wait for the webhook indefinitely
    #[arg(long, global = true)]
    pub no_timeout: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Restyle one source image into several variations
    Style(StyleArgs),
    /// Generate high-conversion ad graphics
    Ad(AdArgs),
}

impl Command {
    pub fn kind(&self) -> FormKind {
        match self {
            Command::Style(_) => FormKind::StyleVariation,
            Command::Ad(_) => FormKind::AdGraphics,
        }
    }

    /// Local image to upload, if any
    pub fn image_path(&self) -> Option<&PathBuf> {
        match self {
            Command::Style(args) => args.image.as_ref(),
            Command::Ad(args) => args.image.as_ref(),
        }
    }

    /// Field edits for everything given on the command line except the
    /// image file, which has to be read first
    pub fn field_values(&self) -> Vec<(FormField, FieldValue)> {
        match self {
            Command::Style(args) => args.field_values(),
            Command::Ad(args) => args.field_values(),
        }
    }
}

/// Style variation form
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Where the results are sent
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Number of variations (1-10)
    #[arg(short = 'n', long, value_name = "COUNT", allow_negative_numbers = true)]
    pub variations: Option<i64>,

    /// Output quality
    #[arg(long, value_parser = parse_quality)]
    pub quality: Option<Quality>,

    /// Free-form style direction
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Source image file
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Source image URL (may be combined with --image)
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,
}

impl StyleArgs {
    pub fn field_values(&self) -> Vec<(FormField, FieldValue)> {
        let mut values = vec![(FormField::Email, FieldValue::text(&self.email))];
        if let Some(count) = self.variations {
            values.push((FormField::VariationCount, FieldValue::Number(count)));
        }
        if let Some(quality) = self.quality {
            values.push((FormField::Quality, FieldValue::text(quality.as_str())));
        }
        if let Some(notes) = &self.notes {
            values.push((FormField::StyleNotes, FieldValue::text(notes)));
        }
        if let Some(url) = &self.image_url {
            values.push((FormField::ImageUrl, FieldValue::text(url)));
        }
        values
    }
}

/// Ad graphics form
#[derive(Args, Debug)]
pub struct AdArgs {
    /// Where the results are sent
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Number of ad variations (1-10)
    #[arg(short = 'n', long, value_name = "COUNT", allow_negative_numbers = true)]
    pub variations: Option<i64>,

    #[arg(long, default_value = "")]
    pub headline: String,

    #[arg(long, default_value = "")]
    pub sub_heading: String,

    /// Key selling points
    #[arg(long, default_value = "")]
    pub pointers: String,

    /// Call-to-action line
    #[arg(long, default_value = "")]
    pub cta: String,

    #[arg(long, default_value = "")]
    pub button_text: String,

    /// Description of the person to feature
    #[arg(long, value_name = "TEXT")]
    pub person_details: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub other_requirements: Option<String>,

    /// Canvas shape
    #[arg(long, value_parser = parse_resolution, default_value = "square")]
    pub resolution: Resolution,

    /// Also generate alternative headlines
    #[arg(long)]
    pub headline_variations: bool,

    /// Photo to include
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

impl AdArgs {
    pub fn field_values(&self) -> Vec<(FormField, FieldValue)> {
        let mut values = vec![
            (FormField::Email, FieldValue::text(&self.email)),
            (FormField::Headline, FieldValue::text(&self.headline)),
            (FormField::SubHeading, FieldValue::text(&self.sub_heading)),
            (FormField::Pointers, FieldValue::text(&self.pointers)),
            (FormField::Cta, FieldValue::text(&self.cta)),
            (FormField::ButtonText, FieldValue::text(&self.button_text)),
            (
                FormField::Resolution,
                FieldValue::text(self.resolution.as_str()),
            ),
            (
                FormField::WantHeadlineVariations,
                FieldValue::Flag(self.headline_variations),
            ),
        ];
        if let Some(count) = self.variations {
            values.push((FormField::VariationCount, FieldValue::Number(count)));
        }
        if let Some(details) = &self.person_details {
            values.push((FormField::PersonDetails, FieldValue::text(details)));
        }
        if let Some(other) = &self.other_requirements {
            values.push((FormField::OtherRequirements, FieldValue::text(other)));
        }
        values
    }
}

fn parse_quality(s: &str) -> Result<Quality, String> {
    s.parse()
}

fn parse_resolution(s: &str) -> Result<Resolution, String> {
    s.parse()
}
