//! Plain text and JSON output.

use mkt_boundary as json;
use mkt_core::{entities::*, listing::*, usecases as uc};
use std::fmt::Write as _;

const CURRENCY_SYMBOL: char = '₹';

/// Groups digits the Indian way, e.g. `12,34,567`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    if digits.len() <= 3 {
        return format!("{CURRENCY_SYMBOL}{digits}");
    }
    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{CURRENCY_SYMBOL}{},{last3}", groups.join(","))
}

pub fn format_age(age: Duration) -> String {
    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    }
    if age.is_negative() {
        return "in the future".to_string();
    }
    match age {
        age if age.whole_days() > 0 => plural(age.whole_days(), "day"),
        age if age.whole_hours() > 0 => plural(age.whole_hours(), "hour"),
        age if age.whole_minutes() > 0 => plural(age.whole_minutes(), "minute"),
        _ => "just now".to_string(),
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

pub struct Formatter {
    pub now: Timestamp,
    pub recent_within: Duration,
}

impl Formatter {
    pub fn listing_line(&self, listing: &EnrichedListing) -> String {
        let mut line = format!(
            "{:<10} {:<14} {} | {} | {} | {}",
            format!("[{}]", listing.status()),
            listing.id(),
            listing.listing.title,
            format_price(listing.listing.price),
            listing.category_name().unwrap_or("-"),
            listing.seller_name(),
        );
        if is_recent(&listing.listing, self.now, self.recent_within) {
            line.push_str(" | NEW");
        }
        if listing.auto_rejected() {
            line.push_str(" | auto-rejected");
        }
        line
    }

    pub fn listing_lines<'a>(
        &self,
        listings: impl IntoIterator<Item = &'a EnrichedListing>,
    ) -> String {
        let lines: Vec<_> = listings
            .into_iter()
            .map(|l| self.listing_line(l))
            .collect();
        if lines.is_empty() {
            return "No listings found.".to_string();
        }
        lines.join("\n")
    }

    pub fn listing_details(&self, listing: &EnrichedListing) -> String {
        let mut out = String::new();
        let l = &listing.listing;
        let _ = writeln!(out, "{}", l.title);
        let _ = writeln!(out, "{}", format_price(l.price));
        if let Some(period) = l.salary_period {
            let _ = writeln!(out, "per {period}");
        }
        if let Some(notice) = status_notice(listing) {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}: {}", notice.title, notice.message);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", l.description);
        let _ = writeln!(out);
        let _ = writeln!(out, "Category: {}", listing.category_name().unwrap_or("-"));
        let role = ContactRole::of(listing.category.as_ref());
        match &listing.seller {
            Some(seller) => {
                let _ = writeln!(
                    out,
                    "{role}: {} ({:.1} stars, {} reviews)",
                    seller.name,
                    f64::from(seller.average_rating),
                    seller.reviews
                );
            }
            None => {
                let _ = writeln!(out, "{role}: {}", listing.seller_name());
            }
        }
        if let Some(created_at) = l.created_at {
            let _ = writeln!(
                out,
                "Posted {} ({})",
                format_age(self.now.since(created_at)),
                format_date(created_at.date())
            );
        }
        out.trim_end().to_string()
    }

    pub fn dashboard(&self, dashboard: &uc::Dashboard) -> String {
        let uc::StatusStats {
            total,
            pending,
            approved,
            rejected,
        } = dashboard.stats;
        format!(
            "Total: {total} | Pending: {pending} | Approved: {approved} | Rejected: {rejected}\n\n{}",
            self.listing_lines(&dashboard.listings)
        )
    }

    pub fn profile(&self, user: &User, listings: &[EnrichedListing]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} <{}>", user.name, user.email.as_str());
        if let Some(mobile) = &user.mobile {
            let _ = writeln!(out, "Mobile: {mobile}");
        }
        if let Some(dob) = user.dob {
            let _ = writeln!(out, "Date of birth: {}", format_date(dob));
        }
        let _ = writeln!(
            out,
            "Rating: {:.1} ({} reviews)",
            f64::from(user.average_rating),
            user.reviews
        );
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.listing_lines(listings));
        out
    }
}

pub fn categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{:<8} {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn json_listing(listing: &EnrichedListing) -> json::EnrichedListing {
    let mut json_listing = json::Listing::from(listing.listing.clone());
    json_listing.status = listing.status().into();
    json_listing.rejection_reason = listing.rejection_reason().map(ToString::to_string);
    json_listing.auto_rejected = Some(listing.auto_rejected());
    json::EnrichedListing {
        listing: json_listing,
        seller: listing.seller.clone().map(Into::into),
        category: listing.category.clone().map(Into::into),
    }
}

pub fn json_listings<'a>(
    listings: impl IntoIterator<Item = &'a EnrichedListing>,
) -> Vec<json::EnrichedListing> {
    listings.into_iter().map(json_listing).collect()
}

pub fn json_dashboard(dashboard: &uc::Dashboard) -> json::Dashboard {
    let uc::StatusStats {
        total,
        pending,
        approved,
        rejected,
    } = dashboard.stats;
    json::Dashboard {
        stats: json::StatusStats {
            total,
            pending,
            approved,
            rejected,
        },
        listings: json_listings(&dashboard.listings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkt_entities::builders::*;
    use time::macros::{date, datetime};

    fn formatter() -> Formatter {
        Formatter {
            now: datetime!(2024-06-15 12:00 UTC).into(),
            recent_within: Duration::days(1),
        }
    }

    #[test]
    fn indian_digit_grouping() {
        assert_eq!("₹0", format_price(0));
        assert_eq!("₹999", format_price(999));
        assert_eq!("₹1,000", format_price(1_000));
        assert_eq!("₹65,000", format_price(65_000));
        assert_eq!("₹6,50,000", format_price(650_000));
        assert_eq!("₹1,23,45,678", format_price(12_345_678));
    }

    #[test]
    fn relative_age() {
        assert_eq!("just now", format_age(Duration::seconds(30)));
        assert_eq!("1 minute ago", format_age(Duration::minutes(1)));
        assert_eq!("5 hours ago", format_age(Duration::hours(5)));
        assert_eq!("14 days ago", format_age(Duration::days(14)));
        assert_eq!("in the future", format_age(Duration::days(-1)));
    }

    #[test]
    fn unknown_seller_in_line() {
        let listing = Listing::build()
            .id("l1")
            .title("Honda City")
            .price(650_000)
            .status(ReviewStatus::Approved)
            .created_at(date!(2024 - 06 - 01))
            .finish();
        let line = formatter().listing_line(&enrich(listing, &[], &[]));
        assert!(line.starts_with("[approved]"));
        assert!(line.contains("Honda City | ₹6,50,000 | - | Unknown"));
        assert!(!line.contains("NEW"));
    }

    #[test]
    fn details_of_rejected_job() {
        let listing = Listing::build()
            .id("l1")
            .title("Rust Developer")
            .status(ReviewStatus::Rejected)
            .category("cat-14")
            .seller("u1")
            .created_at(datetime!(2024-06-15 08:00 UTC))
            .finish();
        let seller = User::build().id("u1").name("Asha").rating(4.5, 2).finish();
        let jobs = Category::new("cat-14", Category::NAME_JOBS);
        let listing = enrich(listing, &[seller], &[jobs]);
        let details = formatter().listing_details(&listing);
        assert!(details.contains("Listing Rejected: This listing was not approved by our moderators."));
        assert!(details.contains("Employer: Asha (4.5 stars, 2 reviews)"));
        assert!(details.contains("Posted 4 hours ago (15/06/2024)"));
    }

    #[test]
    fn json_carries_effective_status() {
        let listing = Listing::build()
            .id("l1")
            .created_at(date!(2024 - 06 - 01))
            .finish();
        let listing = enrich(listing, &[], &[]).resolve(formatter().now, &Default::default());
        let json = json_listing(&listing);
        assert_eq!(json::ReviewStatus::Rejected, json.listing.status);
        assert_eq!(Some(true), json.listing.auto_rejected);
        assert_eq!(
            Some(AUTO_REJECTION_REASON),
            json.listing.rejection_reason.as_deref()
        );
    }
}
