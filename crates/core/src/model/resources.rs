//! Static guidance text shown alongside the checklist.

/// Where an outside-help resource can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Web(&'static str),
    Phone(&'static str),
}

impl Contact {
    /// Link target suitable for an anchor `href`.
    #[must_use]
    pub fn href(self) -> String {
        match self {
            Contact::Web(url) => url.to_string(),
            Contact::Phone(number) => {
                let digits: String = number.chars().filter(char::is_ascii_digit).collect();
                format!("tel:{digits}")
            }
        }
    }

    /// Short human-readable form.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Contact::Web(url) => url
                .trim_start_matches("https://")
                .trim_start_matches("www."),
            Contact::Phone(number) => number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpResource {
    pub name: &'static str,
    pub contact: Contact,
}

pub const HELP_RESOURCES: &[HelpResource] = &[
    HelpResource {
        name: "International Cultic Studies Association (ICSA)",
        contact: Contact::Web("https://www.icsahome.com"),
    },
    HelpResource {
        name: "Cult Education Institute",
        contact: Contact::Web("https://culteducation.com"),
    },
    HelpResource {
        name: "Freedom of Mind (Steven Hassan)",
        contact: Contact::Web("https://freedomofmind.com"),
    },
    HelpResource {
        name: "National Domestic Abuse Hotline",
        contact: Contact::Phone("1-800-799-7233"),
    },
];

pub const FURTHER_READING_TITLE: &str = "Resources focused on the Black community:";

pub const FURTHER_READING: &[&str] = &[
    "John L. Moore, Saints or Sinners: Black Cults and Sects in America",
    "Dr. Joy DeGruy – lectures on trauma/control in marginalized communities",
    "YouTube: “Cults and the Black Community” – interviews with survivors and researchers",
];

pub const INTRODUCTION: &[&str] = &[
    "Throughout history, groups that began with sincere spiritual, social, or cultural goals have sometimes slipped into high-control systems that exploit their members. They often mix truth with manipulation, offering real community or insight while gradually increasing control. Falling into a cult is not a sign of weakness or lack of intelligence—research shows cults often attract bright, committed, idealistic people.",
    "This assessment draws on decades of research (Lifton, Singer, Lalich, Hassan). Use the 1–5 scale for each statement; your scores help you gauge overall risk.",
];

pub const SCALE_HINT: &str =
    "1 = Strongly Disagree · 2 = Disagree · 3 = Neutral/Unsure · 4 = Agree · 5 = Strongly Agree";

pub const DISCLAIMER: &str =
    "Educational tool. Not a diagnostic instrument; consider consulting professionals for advice.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_contact_links_to_digits() {
        let hotline = HELP_RESOURCES
            .iter()
            .find(|r| matches!(r.contact, Contact::Phone(_)))
            .unwrap();
        assert_eq!(hotline.contact.href(), "tel:18007997233");
        assert_eq!(hotline.contact.display(), "1-800-799-7233");
    }

    #[test]
    fn web_contact_displays_bare_host() {
        assert_eq!(Contact::Web("https://www.icsahome.com").display(), "icsahome.com");
        assert_eq!(Contact::Web("https://culteducation.com").display(), "culteducation.com");
    }
}
