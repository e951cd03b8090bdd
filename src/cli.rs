use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Moderation of a classifieds marketplace.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file [default: marketplace.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with categories, users and listings
    #[arg(long, global = true, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Act on behalf of the user with this id
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    pub user_id: Option<String>,

    /// Reference time, either `YYYY-MM-DD` or RFC 3339 [default: current time]
    #[arg(long, global = true, value_name = "TIME")]
    pub now: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all publicly visible listings
    Browse {
        /// Category id or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Search in title and description
        #[arg(long)]
        query: Option<String>,
    },
    /// Show the details of a listing
    Show { listing_id: String },
    /// List the listings of the current user
    Profile,
    /// Show all listings and their moderation status (admins only)
    Dashboard {
        /// Category id or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Search in title and description
        #[arg(long)]
        query: Option<String>,
    },
    /// Approve or reject a listing (admins only)
    Review {
        listing_id: String,
        decision: DecisionArg,
        /// Reason of a rejection
        #[arg(long)]
        reason: Option<String>,
    },
    /// Create a new listing that awaits review
    Post(PostArgs),
    /// Rate a seller
    Rate {
        seller_id: String,
        /// Number of stars from 1 to 5
        stars: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Apply for a job listing
    Apply(ApplyArgs),
    /// Edit the profile of the current user
    EditProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        /// Date of birth as `YYYY-MM-DD`
        #[arg(long)]
        dob: Option<String>,
    },
    /// List all categories
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecisionArg {
    Approve,
    Reject,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Price in whole currency units
    #[arg(long)]
    pub price: u64,
    /// Category id
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Salary period of job listings
    #[arg(long, value_parser = ["year", "month", "hour"])]
    pub salary_period: Option<String>,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    pub listing_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub mobile: String,
    #[command(flatten)]
    pub resume: ResumeArgs,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ResumeArgs {
    /// File name of the resume (.pdf, .doc, .docx)
    #[arg(long, value_name = "FILE")]
    pub resume_file: Option<PathBuf>,
    /// Link to an online resume
    #[arg(long, value_name = "URL")]
    pub resume_link: Option<String>,
}
