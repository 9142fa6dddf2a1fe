use crate::config::SiteConfig;
use crate::models::NearbyCourse;

use super::{SeatStatus, escape};

/// Where the course meets: the scraped location, or the college's town.
pub fn location_label(nearby: &NearbyCourse, site: &SiteConfig) -> String {
    match &nearby.course.location {
        Some(location) => location.clone(),
        None => format!("{}, {}", nearby.course.institution.city, site.region),
    }
}

pub fn render_card(nearby: &NearbyCourse, site: &SiteConfig) -> String {
    let course = &nearby.course;
    let status = SeatStatus::from_seats(course.seats_available);
    let open = course.seats_available > 0;

    let mut html = String::new();
    html.push_str("<article class=\"card\">\n");

    html.push_str(&format!(
        "<div class=\"card-head\"><div><div class=\"college\">{}</div><h2>{}</h2></div>\
         <div class=\"right\"><div class=\"distance\">{} miles away</div>\
         <span class=\"seats {}\" title=\"{}\">{} seats</span></div></div>\n",
        escape(&course.institution.name),
        escape(&course.title),
        nearby.distance,
        status.css_class(),
        status.label(),
        course.seats_available,
    ));

    html.push_str("<dl class=\"details\">\n");
    for (term, value) in [
        ("Date", course.start_date.format("%a, %b %-d, %Y").to_string()),
        ("Time", course.start_time.clone()),
        ("Location", location_label(nearby, site)),
        ("Price", course.price.clone()),
    ] {
        html.push_str(&format!("<div><dt>{}</dt><dd>{}</dd></div>\n", term, escape(&value)));
    }
    html.push_str("</dl>\n");

    if course.waitlist_available {
        html.push_str("<p class=\"waitlist\">Wait List Available</p>\n");
    }

    html.push_str(&format!(
        "<a class=\"register{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
        if open { "" } else { " disabled" },
        escape(&course.registration_url),
        if open { "Register Now &rarr;" } else { "Class Full" },
    ));

    if let Some(scraped_at) = course.scraped_at {
        html.push_str(&format!(
            "<p class=\"updated\">Last updated: <time datetime=\"{}\">{}</time></p>\n",
            scraped_at.to_rfc3339(),
            scraped_at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC"),
        ));
    }

    html.push_str("</article>\n");
    html
}
