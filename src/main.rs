use anyhow::{anyhow, Context as _, Result};
use clap::Parser as _;
use mkt_boundary as json;
use mkt_core::{
    authorization::session::Session,
    entities::*,
    listing::*,
    repositories::*,
    usecases::{self as uc, ResolutionContext},
};
use mkt_db_memory::InMemoryDb;
use serde::Serialize;

mod cli;
mod config;
mod render;
mod seed;

use self::{
    cli::{Cli, Command, DecisionArg},
    config::Config,
    render::Formatter,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    run(cli)
}

fn parse_now(now: Option<&str>) -> Result<Timestamp> {
    match now {
        Some(now) => json::parse_timestamp(now).with_context(|| format!("Invalid time '{now}'")),
        None => Ok(Timestamp::now()),
    }
}

fn print<T: Serialize>(as_json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        seed,
        user_id,
        now,
        json: as_json,
        command,
    } = cli;
    let cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    let seed_file = seed.unwrap_or(cfg.data.seed_file);
    let db = InMemoryDb::import(seed::load_seed_file(&seed_file)?);

    let ctx = ResolutionContext {
        now: parse_now(now.as_deref())?,
        staleness: cfg.moderation.staleness,
    };
    let fmt = Formatter {
        now: ctx.now,
        recent_within: cfg.moderation.recent_within,
    };

    let mut session = match user_id {
        Some(id) => {
            let user = db
                .try_get_user(&id)?
                .ok_or_else(|| anyhow!("Unknown user '{id}'"))?;
            log::debug!("Acting as {} ({})", user.name, user.role);
            Session::logged_in(user)
        }
        None => Session::anonymous(),
    };

    match command {
        Command::Browse { category, query } => {
            let filter = ListingFilter::new(category.parse()?, query.as_deref());
            let listings = uc::browse_listings(&db, &ctx, &filter)?;
            print(as_json, &render::json_listings(&listings), || {
                fmt.listing_lines(&listings)
            })?;
        }
        Command::Show { listing_id } => {
            let listing = uc::load_listing(&db, &listing_id, &ctx)
                .with_context(|| format!("Unable to load listing '{listing_id}'"))?;
            print(as_json, &render::json_listing(&listing), || {
                fmt.listing_details(&listing)
            })?;
        }
        Command::Profile => {
            let user = logged_in_user(&session)?;
            let listings = uc::user_listings(&db, user, &ctx)?;
            print(as_json, &render::json_listings(&listings), || {
                fmt.profile(user, &listings)
            })?;
        }
        Command::Dashboard { category, query } => {
            let mut dashboard = uc::moderation_dashboard(&db, &session, &ctx)?;
            let filter = ListingFilter::new(category.parse()?, query.as_deref());
            dashboard.listings.retain(|l| filter.matches(&l.listing));
            print(as_json, &render::json_dashboard(&dashboard), || {
                fmt.dashboard(&dashboard)
            })?;
        }
        Command::Review {
            listing_id,
            decision,
            reason,
        } => {
            let reviewer = logged_in_user(&session)?;
            if !session.can_moderate() {
                return Err(uc::Error::Forbidden.into());
            }
            let decision = match decision {
                DecisionArg::Approve => {
                    if reason.is_some() {
                        log::warn!("Ignoring reason of approval");
                    }
                    Decision::Approve
                }
                DecisionArg::Reject => Decision::reject(reason.as_deref()),
            };
            let count = uc::review_listings(&db, reviewer, &[listing_id.as_str()], &decision)?;
            if count == 0 {
                log::warn!("No listing with id '{listing_id}'");
                println!("Nothing changed.");
                return Ok(());
            }
            let listing = uc::load_listing(&db, &listing_id, &ctx)?;
            print(as_json, &render::json_listing(&listing), || {
                fmt.listing_line(&listing)
            })?;
        }
        Command::Post(args) => {
            let seller = logged_in_user(&session)?;
            let cli::PostArgs {
                title,
                description,
                price,
                category,
                image_url,
                salary_period,
            } = args;
            let salary_period = salary_period
                .as_deref()
                .map(str::parse::<SalaryPeriod>)
                .transpose()?;
            let new_listing = uc::NewListing {
                title,
                description,
                price,
                category_id: category,
                image_url,
                image_hint: None,
                salary_period,
            };
            let listing = uc::create_new_listing(&db, seller, new_listing, ctx.now)?;
            let listing = uc::load_listing(&db, listing.id.as_str(), &ctx)?;
            print(as_json, &render::json_listing(&listing), || {
                fmt.listing_details(&listing)
            })?;
        }
        Command::Rate {
            seller_id,
            stars,
            comment,
        } => {
            let rate = uc::NewSellerRating {
                seller_id,
                value: RatingValue::from(stars),
                comment,
            };
            let seller = uc::rate_seller(&db, session.user(), rate, ctx.now)?;
            print(as_json, &json::User::from(seller.clone()), || {
                format!(
                    "{} is now rated {:.1} stars ({} reviews)",
                    seller.name,
                    f64::from(seller.average_rating),
                    seller.reviews
                )
            })?;
        }
        Command::Apply(args) => {
            let cli::ApplyArgs {
                listing_id,
                name,
                email,
                mobile,
                resume,
            } = args;
            let resume = match resume {
                cli::ResumeArgs {
                    resume_file: Some(file),
                    ..
                } => Resume::Attachment {
                    file_name: file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                },
                cli::ResumeArgs {
                    resume_link: Some(link),
                    ..
                } => Resume::Link(link),
                _ => return Err(anyhow!("Please attach a resume or provide a link")),
            };
            let application = uc::NewJobApplication {
                listing_id,
                name,
                email,
                mobile,
                resume,
            };
            let application = uc::apply_for_job(&db, session.user(), application, ctx.now)?;
            print(as_json, &json::JobApplication::from(application), || {
                "Your application has been submitted successfully.".to_string()
            })?;
        }
        Command::EditProfile { name, mobile, dob } => {
            let user = logged_in_user(&session)?.clone();
            let dob = match dob {
                Some(dob) => Some(json::parse_date(&dob)?),
                None => user.dob,
            };
            let update = uc::ProfileUpdate {
                name: name.unwrap_or(user.name),
                mobile: mobile.or(user.mobile),
                dob,
            };
            let user = uc::update_profile(&db, &mut session, update)?;
            print(as_json, &json::User::from(user.clone()), || {
                format!("Updated profile of {}", user.name)
            })?;
        }
        Command::Categories => {
            let categories = db.all_categories()?;
            let json_categories: Vec<_> = categories
                .iter()
                .cloned()
                .map(json::Category::from)
                .collect();
            print(as_json, &json_categories, || render::categories(&categories))?;
        }
    }
    Ok(())
}

fn logged_in_user(session: &Session) -> Result<&User> {
    session
        .user()
        .ok_or_else(|| anyhow!("Please log in with --as <USER_ID>"))
}
