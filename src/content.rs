// src/content.rs: every piece of page copy the site renders.
//
// Pages stay generic: they map these tables into cards, lists and forms.

use crate::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tribe {
    pub month: &'static str,
    pub name: &'static str,
    pub verse: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ministry {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sermon {
    pub id: u32,
    pub title: &'static str,
    pub preacher: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub video_url: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEntry {
    Link(NavLink),
    Dropdown {
        title: &'static str,
        icon: &'static str,
        items: &'static [NavLink],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Textarea,
}

impl InputKind {
    pub fn input_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::Textarea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSpec {
    /// Stable identifier used in submission logs.
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FormFieldSpec],
    pub success_message: &'static str,
    pub redirect: Option<Route>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormLink {
    pub route: Route,
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub bank: &'static str,
    pub account_name: &'static str,
    pub number: &'static str,
    pub swift: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GivingChannel {
    pub title: &'static str,
    pub icon: &'static str,
    pub accounts: &'static [BankAccount],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
    pub route: Route,
}

/* ---------- home ---------- */

pub const SLIDES: &[Slide] = &[
    Slide {
        image: "https://images.unsplash.com/photo-1507692049602-4b6f40a9a7a8?q=80&w=2670&auto=format&fit=crop",
        title: "Welcome Home.",
        subtitle: "Experience God's presence in a 360-degree atmosphere of vibrant worship, life-changing word, and authentic community.",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=2669&auto=format&fit=crop",
        title: "Find Your People.",
        subtitle: "We are a family of young believers passionate about Jesus and dedicated to authentic relationships.",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1533576099719-219a3b23194a?q=80&w=2574&auto=format&fit=crop",
        title: "Live With Purpose.",
        subtitle: "Discover your God-given calling and be empowered to make a difference in our world.",
    },
];

/* ---------- about ---------- */

pub const VISION: &[&str] = &[
    "Our vision is to raise a generation of vibrant youth passionately committed to Christ, equipped to fulfill their divine purpose, and impacting their world for God's glory.",
    "We are committed to creating an atmosphere where young people experience God's presence in a 360-degree way: through vibrant worship, life-changing Word, and authentic community, empowering them to live a life of purpose and influence.",
];

pub const CORE_VALUES: &[Highlight] = &[
    Highlight { title: "Passion for Christ:", body: "Deep love and devotion to Jesus in all we do." },
    Highlight { title: "Authentic Community:", body: "Fostering genuine, supportive relationships." },
    Highlight { title: "Purpose-Driven Living:", body: "Empowering individuals to discover and walk in their God-given calling." },
    Highlight { title: "Excellence:", body: "Doing all things with utmost dedication and quality for God's glory." },
    Highlight { title: "Impact:", body: "Making a tangible difference in our generation and beyond." },
];

pub const STORY: &str = "Founded with a passion to reach young people, RCCG 360 Degrees Youth Church began as a small gathering of enthusiastic believers. Over the years, we have grown into a thriving community, witnessing countless lives transformed by the power of God's Word and the warmth of genuine fellowship. We believe in nurturing young leaders and providing a platform for every individual to grow spiritually, personally, and professionally.";

/* ---------- tribes & ministries ---------- */

pub const TRIBES: &[Tribe] = &[
    Tribe { month: "January", name: "Tribe of Judah", verse: "Genesis 49:10", description: "Known for leadership and praise. Members are trailblazers and worshipers." },
    Tribe { month: "February", name: "Tribe of Benjamin", verse: "Deuteronomy 33:12", description: "Characterized by boldness and strength. Members are fearless and strategic thinkers." },
    Tribe { month: "March", name: "Tribe of Levi", verse: "Numbers 3:12", description: "Dedicated to service and worship. Members are ministers and intercessors." },
    Tribe { month: "April", name: "Tribe of Zebulun", verse: "Deuteronomy 33:18", description: "Excels in evangelism and outreach. Members are passionate soul-winners." },
    Tribe { month: "May", name: "Tribe of Asher", verse: "Deuteronomy 33:24", description: "Known for prosperity and abundance. Members are resourceful and blessed." },
    Tribe { month: "June", name: "Tribe of Naphtali", verse: "Genesis 49:21", description: "Symbolizes freedom and good news. Members are messengers and joyful givers." },
    Tribe { month: "July", name: "Tribe of Dan", verse: "Genesis 49:16", description: "Represents justice and wisdom. Members are discerning and fair." },
    Tribe { month: "August", name: "Tribe of Gad", verse: "Genesis 49:19", description: "Embodies strength and overcoming. Members are resilient and victorious." },
    Tribe { month: "September", name: "Tribe of Simeon", verse: "Genesis 49:7", description: "Focused on community and unity. Members are peacekeepers and builders." },
    Tribe { month: "October", name: "Tribe of Issachar", verse: "1 Chronicles 12:32", description: "Possesses understanding of times. Members are insightful and strategic." },
    Tribe { month: "November", name: "Tribe of Manasseh", verse: "Genesis 41:51", description: "Signifies fruitfulness and forgetfulness of past troubles. Members are resilient and productive." },
    Tribe { month: "December", name: "Tribe of Ephraim", verse: "Genesis 41:52", description: "Represents fruitfulness and multitude. Members are fruitful and multiply impact." },
];

pub const MINISTRIES: &[Ministry] = &[
    Ministry { name: "Choir & Music", description: "Leading the congregation into God's presence through anointed praise and worship.", icon: "fa-solid fa-microphone" },
    Ministry { name: "Ushering & Protocol", description: "Ensuring order, warmth, and hospitality during services and events.", icon: "fa-solid fa-handshake" },
    Ministry { name: "Media & IT", description: "Managing audio-visuals, live streaming, and church technology.", icon: "fa-solid fa-display" },
    Ministry { name: "Follow-up & Care", description: "Nurturing new members and providing pastoral care to the church family.", icon: "fa-solid fa-heart-pulse" },
    Ministry { name: "Evangelism & Outreach", description: "Spreading the gospel and impacting our community with the love of Christ.", icon: "fa-solid fa-globe" },
    Ministry { name: "Sanctuary Keepers", description: "Maintaining the cleanliness and sanctity of the church environment.", icon: "fa-solid fa-broom" },
];

/* ---------- i'm new ---------- */

pub const WHAT_TO_EXPECT: &[Highlight] = &[
    Highlight {
        title: "Vibrant Worship & Powerful Word",
        body: "Our services typically last 90 minutes, filled with an electrifying atmosphere of worship, a life-changing message, and heartfelt prayers.",
    },
    Highlight {
        title: "Come As You Are",
        body: "There's no dress code or expectation. We're simply excited to have you, regardless of what you're wearing or where you're from.",
    },
    Highlight {
        title: "Authentic Community",
        body: "We believe in genuine connections. You'll find a friendly environment where you can connect with others and build lasting relationships.",
    },
];

pub const NEXT_STEPS: &[Step] = &[
    Step {
        icon: "fa-solid fa-user-plus",
        title: "Fill Our First Timer's Form",
        body: "Let us know you were here! We have a special welcome gift just for you.",
        action: "Fill Form",
        route: Route::NewMemberForm,
    },
    Step {
        icon: "fa-solid fa-users",
        title: "Join a Tribe & Ministry",
        body: "Connect deeper with our family through various groups and ministries.",
        action: "Explore Groups",
        route: Route::GroupsMinistries,
    },
    Step {
        icon: "fa-solid fa-graduation-cap",
        title: "Attend Believer's Class",
        body: "Learn the foundational truths of your faith in an interactive setting.",
        action: "Register Now",
        route: Route::BelieversClassForm,
    },
];

/* ---------- events & sermons ---------- */

pub const EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Youth Summit 2025",
        date: "August 15-17, 2025",
        time: "9:00 AM - 5:00 PM Daily",
        location: "The Youth Place, Lekki Phase 1",
        description: "A transformative gathering for young people, featuring inspiring speakers, workshops, and electrifying praise and worship sessions. Don't miss out!",
        image_url: "https://images.unsplash.com/photo-1527529482837-4698179dc6ce?q=80&w=2670&auto=format&fit=crop",
    },
    Event {
        id: 2,
        title: "Annual Missions Trip Briefing",
        date: "September 5, 2025",
        time: "7:00 PM - 9:00 PM",
        location: "Church Auditorium",
        description: "Information session for those interested in participating in our upcoming missions trip. Learn about destinations, requirements, and impact.",
        image_url: "https://images.unsplash.com/photo-1531058020387-3be344556be6?q=80&w=2670&auto=format&fit=crop",
    },
    Event {
        id: 3,
        title: "Couples Hangout",
        date: "September 20, 2025",
        time: "6:00 PM - 9:00 PM",
        location: "Exclusive City Rooftop",
        description: "A relaxing and insightful evening for couples to connect, share, and grow together in faith and love.",
        image_url: "https://images.unsplash.com/photo-1542037104857-4bb49a87abe4?q=80&w=2574&auto=format&fit=crop",
    },
    Event {
        id: 4,
        title: "Thanksgiving Service",
        date: "November 24, 2025",
        time: "10:00 AM - 1:00 PM",
        location: "Church Main Auditorium",
        description: "Join us as we give thanks to God for His faithfulness throughout the year. A service filled with gratitude and celebration.",
        image_url: "https://images.unsplash.com/photo-1598448375973-753b8fb3a054?q=80&w=2574&auto=format&fit=crop",
    },
];

pub const SERMONS: &[Sermon] = &[
    Sermon {
        id: 1,
        title: "The Power of Forgiveness",
        preacher: "Pastor John Doe",
        date: "June 23, 2025",
        description: "A profound message on the liberating power of forgiveness, both in giving and receiving.",
        video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ",
        image_url: "https://images.unsplash.com/photo-1598448375973-753b8fb3a054?q=80&w=2574&auto=format&fit=crop",
    },
    Sermon {
        id: 2,
        title: "Walking in Faith",
        preacher: "Minister Jane Doe",
        date: "June 16, 2025",
        description: "Discover practical steps to strengthen your faith and walk confidently in God's promises.",
        video_url: "https://www.youtube.com/embed/Fw0v_L1P6vQ",
        image_url: "https://images.unsplash.com/photo-1533576099719-219a3b23194a?q=80&w=2574&auto=format&fit=crop",
    },
    Sermon {
        id: 3,
        title: "Unlocking Your Divine Purpose",
        preacher: "Pastor Sam Smith",
        date: "June 9, 2025",
        description: "An inspiring sermon on identifying and embracing the unique purpose God has for your life.",
        video_url: "https://www.youtube.com/embed/tgbNymZ7vqY",
        image_url: "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?q=80&w=2670&auto=format&fit=crop",
    },
    Sermon {
        id: 4,
        title: "The Importance of Community",
        preacher: "Pastor John Doe",
        date: "June 2, 2025",
        description: "Exploring the biblical foundation and practical benefits of being part of a Christ-centered community.",
        video_url: "https://www.youtube.com/embed/q_dYj3y49p8",
        image_url: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=2669&auto=format&fit=crop",
    },
];

/* ---------- faq ---------- */

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What should I expect on my first visit?",
        answer: "Expect a warm welcome, vibrant praise and worship, and a powerful message from the Word of God. Our services typically last about 90 minutes. Feel free to connect with our 'New Members' team after the service!",
    },
    FaqEntry {
        question: "Is there a dress code?",
        answer: "No, there isn't! We encourage you to come as you are and wear whatever you feel comfortable in. Our focus is on connecting with God and each other, not on outward appearance.",
    },
    FaqEntry {
        question: "Do you have programs for children or teenagers?",
        answer: "While 360 Degrees Youth Church primarily caters to young adults, our parent church (RCCG The Youth Place) has dedicated children's church and teenage ministries. Please ask one of our ushers for more details.",
    },
    FaqEntry {
        question: "How can I join a small group or ministry?",
        answer: "You can explore our 'Our Tribes & Ministries' page to see the various groups and serving opportunities. Fill out the respective forms in our 'Forms Centre' and our team will connect with you.",
    },
    FaqEntry {
        question: "How can I get baptized?",
        answer: "If you've given your life to Christ and are ready for water baptism, please indicate your interest by filling out the 'Believer's Class' form. Our team will guide you through the process, which includes a foundational class.",
    },
    FaqEntry {
        question: "Can I watch past sermons online?",
        answer: "Yes! All our past sermons are available on our 'Sermons' page, where you can watch or listen to messages you might have missed or want to revisit.",
    },
];

/* ---------- give ---------- */

const ACCOUNT_NAME: &str = "RCCG 360 Youth Church";

pub const GIVING_CHANNELS: &[GivingChannel] = &[
    GivingChannel {
        title: "Bank Transfer (Naira Accounts)",
        icon: "fa-solid fa-money-bill-transfer",
        accounts: &[
            BankAccount { bank: "Zenith Bank", account_name: ACCOUNT_NAME, number: "1234567890", swift: None },
            BankAccount { bank: "GTBank", account_name: ACCOUNT_NAME, number: "0987654321", swift: None },
            BankAccount { bank: "Access Bank", account_name: ACCOUNT_NAME, number: "1122334455", swift: None },
        ],
    },
    GivingChannel {
        title: "Bank Transfer (USD Account)",
        icon: "fa-solid fa-dollar-sign",
        accounts: &[BankAccount {
            bank: "Citibank",
            account_name: ACCOUNT_NAME,
            number: "9876543210",
            swift: Some("CITIUS33"),
        }],
    },
];

pub const WHY_GIVE: &[&str] = &[
    "At RCCG 360 Degrees Youth Church, every seed sown empowers us to spread the gospel, nurture young believers, and serve our community. Your tithes, offerings, and donations directly fuel our ministries, outreach programs, and facility enhancements.",
    "Through your partnership, we can continue to create a vibrant environment for spiritual growth, organize impactful events, and extend a helping hand to those in need. Thank you for your obedience and faith!",
];

pub const GIVING_VERSE: &str = "\"Each of you should give what you have decided in your heart to give, not reluctantly or under compulsion, for God loves a cheerful giver.\" - 2 Corinthians 9:7 (NIV)";

/* ---------- navigation ---------- */

pub const EXPLORE_LINKS: &[NavLink] = &[
    NavLink { route: Route::About, title: "About Us", icon: "fa-solid fa-circle-info" },
    NavLink { route: Route::GroupsMinistries, title: "Our Tribes & Ministries", icon: "fa-solid fa-users-gear" },
    NavLink { route: Route::ImNew, title: "I'm New", icon: "fa-solid fa-handshake-angle" },
    NavLink { route: Route::Faq, title: "FAQ", icon: "fa-solid fa-circle-question" },
    NavLink { route: Route::FormsCentre, title: "Forms Centre", icon: "fa-solid fa-file-lines" },
];

pub const NAV: &[NavEntry] = &[
    NavEntry::Link(NavLink { route: Route::Home, title: "Home", icon: "fa-solid fa-house" }),
    NavEntry::Dropdown { title: "Explore", icon: "fa-solid fa-book", items: EXPLORE_LINKS },
    NavEntry::Link(NavLink { route: Route::Sermons, title: "Sermons", icon: "fa-solid fa-book-bible" }),
    NavEntry::Link(NavLink { route: Route::Events, title: "Events", icon: "fa-solid fa-calendar-check" }),
    NavEntry::Link(NavLink { route: Route::Contact, title: "Contact", icon: "fa-solid fa-envelope-open-text" }),
    NavEntry::Link(NavLink { route: Route::Give, title: "Give", icon: "fa-solid fa-hand-holding-dollar" }),
];

pub const FOOTER_EXPLORE: &[NavLink] = &[
    NavLink { route: Route::About, title: "About Us", icon: "" },
    NavLink { route: Route::GroupsMinistries, title: "Tribes & Ministries", icon: "" },
    NavLink { route: Route::Sermons, title: "Sermons", icon: "" },
    NavLink { route: Route::Events, title: "Events", icon: "" },
];

pub const FOOTER_HELP: &[NavLink] = &[
    NavLink { route: Route::PrayerForm, title: "Prayer Request", icon: "" },
    NavLink { route: Route::CounsellingForm, title: "Counselling", icon: "" },
    NavLink { route: Route::Contact, title: "Contact Us", icon: "" },
    NavLink { route: Route::Faq, title: "FAQ", icon: "" },
];

pub const SOCIAL_ICONS: &[&str] = &[
    "fa-brands fa-x-twitter",
    "fa-brands fa-instagram",
    "fa-brands fa-youtube",
];

/* ---------- forms ---------- */

pub const FORM_LINKS: &[FormLink] = &[
    FormLink { route: Route::NewMemberForm, title: "First-Timer's Welcome Form", icon: "fa-solid fa-user-plus" },
    FormLink { route: Route::BelieversClassForm, title: "Join Believer's Class", icon: "fa-solid fa-book-open" },
    FormLink { route: Route::WorkersInTrainingForm, title: "Workers in Training", icon: "fa-solid fa-screwdriver-wrench" },
    FormLink { route: Route::SchoolOfDiscipleshipForm, title: "School of Discipleship", icon: "fa-solid fa-graduation-cap" },
    FormLink { route: Route::PrayerForm, title: "Need Prayers", icon: "fa-solid fa-hands-praying" },
    FormLink { route: Route::CounsellingForm, title: "Need Counselling", icon: "fa-solid fa-hand-holding-heart" },
];

const fn field(name: &'static str, label: &'static str, kind: InputKind, required: bool) -> FormFieldSpec {
    FormFieldSpec { name, label, kind, required }
}

const FULL_NAME: FormFieldSpec = field("name", "Full Name", InputKind::Text, true);
const EMAIL: FormFieldSpec = field("email", "Email Address", InputKind::Email, true);
const PHONE_OPTIONAL: FormFieldSpec = field("phone", "Phone Number (Optional)", InputKind::Tel, false);

pub static NEW_MEMBER_FORM: FormSpec = FormSpec {
    key: "new-member",
    title: "First-Timer's Welcome Form",
    subtitle: "We're excited you visited! Please fill out this form so we can connect and offer a special welcome.",
    fields: &[FULL_NAME, EMAIL, PHONE_OPTIONAL],
    success_message: "Thank you for visiting! Your information has been received. Redirecting you to our New Members page...",
    redirect: Some(Route::ImNew),
};

pub static BELIEVERS_CLASS_FORM: FormSpec = FormSpec {
    key: "believers-class",
    title: "Believer's Class Registration",
    subtitle: "Begin your foundational journey in Christ by registering for our Believer's Class.",
    fields: &[FULL_NAME, EMAIL, PHONE_OPTIONAL],
    success_message: "Thank you for registering! We have received your registration for the Believer's Class. We will contact you soon with more details.",
    redirect: None,
};

pub static WORKERS_IN_TRAINING_FORM: FormSpec = FormSpec {
    key: "workers-in-training",
    title: "Workers In Training Registration",
    subtitle: "Get equipped to serve effectively in God's house. Join our Workers In Training program.",
    fields: &[
        FULL_NAME,
        EMAIL,
        field("reason", "Why do you want to serve?", InputKind::Textarea, true),
    ],
    success_message: "Thank you for enrolling! We have received your application for Workers In Training. We will reach out shortly.",
    redirect: None,
};

pub static SCHOOL_OF_DISCIPLESHIP_FORM: FormSpec = FormSpec {
    key: "school-of-discipleship",
    title: "School of Discipleship Registration",
    subtitle: "Go deeper in your walk with God and grow in spiritual maturity through our School of Discipleship.",
    fields: &[
        FULL_NAME,
        EMAIL,
        field("journey", "Share your spiritual journey briefly:", InputKind::Textarea, true),
    ],
    success_message: "Thank you for registering! Your registration for the School of Discipleship has been received. We look forward to your journey with us.",
    redirect: None,
};

pub static PRAYER_FORM: FormSpec = FormSpec {
    key: "prayer",
    title: "Submit a Prayer Request",
    subtitle: "Let us stand in faith with you. Share your prayer needs with our intercessory team.",
    fields: &[
        field("name", "Name (Optional)", InputKind::Text, false),
        field("email", "Email (Optional)", InputKind::Email, false),
        field("request", "Your Prayer Request", InputKind::Textarea, true),
    ],
    success_message: "Thank you for your prayer request! Your request has been received by our prayer team. We are standing in agreement with you.",
    redirect: None,
};

pub static COUNSELLING_FORM: FormSpec = FormSpec {
    key: "counselling",
    title: "Confidential Counselling",
    subtitle: "Receive faith-based support and guidance in a safe and confidential environment.",
    fields: &[
        FULL_NAME,
        EMAIL,
        field("issue", "Briefly describe your concern", InputKind::Textarea, true),
    ],
    success_message: "Counselling Request Sent! Your request has been received. Our counseling team will reach out to you within 48 hours to schedule a session.",
    redirect: None,
};

pub static CONTACT_FORM: FormSpec = FormSpec {
    key: "contact",
    title: "Send Us a Message",
    subtitle: "",
    fields: &[
        field("name", "Your Name", InputKind::Text, true),
        field("email", "Your Email", InputKind::Email, true),
        field("message", "Your Message", InputKind::Textarea, true),
    ],
    success_message: "Thank you for reaching out! Your message has been received and our team will get back to you soon.",
    redirect: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn one_tribe_per_month_in_calendar_order() {
        let months = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        let got: Vec<_> = TRIBES.iter().map(|t| t.month).collect();
        assert_eq!(got, months);
    }

    #[test]
    fn nav_routes_round_trip_through_the_router() {
        let mut links: Vec<&NavLink> = FOOTER_EXPLORE.iter().chain(FOOTER_HELP).collect();
        for entry in NAV {
            match entry {
                NavEntry::Link(l) => links.push(l),
                NavEntry::Dropdown { items, .. } => links.extend(items.iter()),
            }
        }
        for link in links {
            let path = link.route.to_path();
            assert_eq!(Route::recognize(&path), Some(link.route), "{path}");
        }
    }

    #[test]
    fn forms_centre_lists_every_form_once() {
        let mut routes: Vec<_> = FORM_LINKS.iter().map(|f| f.route.to_path()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), 6);
    }

    #[test]
    fn form_field_names_are_unique_within_a_form() {
        for spec in [
            &NEW_MEMBER_FORM,
            &BELIEVERS_CLASS_FORM,
            &WORKERS_IN_TRAINING_FORM,
            &SCHOOL_OF_DISCIPLESHIP_FORM,
            &PRAYER_FORM,
            &COUNSELLING_FORM,
            &CONTACT_FORM,
        ] {
            let mut names: Vec<_> = spec.fields.iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), spec.fields.len(), "{}", spec.key);
        }
    }

    #[test]
    fn only_the_new_member_form_redirects() {
        assert_eq!(NEW_MEMBER_FORM.redirect, Some(Route::ImNew));
        assert_eq!(PRAYER_FORM.redirect, None);
        assert_eq!(CONTACT_FORM.redirect, None);
    }

    #[test]
    fn usd_account_carries_a_swift_code() {
        let usd = &GIVING_CHANNELS[1];
        assert_eq!(usd.accounts[0].swift, Some("CITIUS33"));
        assert!(GIVING_CHANNELS[0].accounts.iter().all(|a| a.swift.is_none()));
    }
}
