//! Static report copy. Text may carry `$A$`..`$R$` and `$P1$`..`$P9$`
//! placeholders, which are filled in after selection.

use crate::engine::domain::{PrimaryFactor, SecondaryFactor};

/// One family of paragraphs, addressable by lead factor or composite code.
#[derive(Debug)]
pub struct TemplateTable {
    pub single: [(PrimaryFactor, &'static str); 4],
    pub low_energy: [(PrimaryFactor, &'static str); 4],
    /// Keyed by alphabetically sorted type code.
    pub composite: [(&'static str, &'static str); 10],
}

impl TemplateTable {
    pub fn single(&self, factor: PrimaryFactor) -> Option<&'static str> {
        lookup(&self.single, &factor)
    }

    pub fn low_energy(&self, factor: PrimaryFactor) -> Option<&'static str> {
        lookup(&self.low_energy, &factor)
    }

    pub fn composite(&self, code: &str) -> Option<&'static str> {
        self.composite
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, text)| *text)
    }
}

fn lookup<K: PartialEq>(entries: &[(K, &'static str)], key: &K) -> Option<&'static str> {
    entries
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, text)| *text)
}

pub static PATTERN_TEMPLATES: TemplateTable = TemplateTable {
    single: [
        (
            PrimaryFactor::Drive,
            "The clearest grain in your PAIOR profile is the energy of **Drive (A)**, at $A$ points. \
             Rather than lingering in thought, you move first and turn intentions into concrete results. \
             A 'just try it' attitude, more than hesitation, is the core engine that carries your life forward.",
        ),
        (
            PrimaryFactor::Order,
            "The clearest grain in your PAIOR profile is the energy of **Order (O)**, at $O$ points. \
             You take uncertain and disorderly input from the outside and arrange it into a system of your own, \
             making it predictable. This is not a taste for tidiness alone but a deep instinct to secure \
             psychological stability by bringing life's uncertainty under control.",
        ),
        (
            PrimaryFactor::Inquiry,
            "The deepest current in your PAIOR profile is the energy of **Inquiry (I)**, at $I$ points. \
             You do not stop at the surface of things; you dig for the causes and principles hidden beneath \
             them, driven by an intellectual instinct to reach the essence.",
        ),
        (
            PrimaryFactor::Relation,
            "The most luminous grain in your PAIOR profile is the energy of **Relation (R)**, at $R$ points. \
             You tune in to other people's emotional frequency, keep the mood around you in harmony, and find \
             meaning in the web of connections between people.",
        ),
    ],
    low_energy: [
        (
            PrimaryFactor::Drive,
            "Your energy is low across the board, yet your latent strength is **Drive (A)** ($A$ points). \
             It is a hidden grain that lets you move forward with a 'just try it' attitude, a valuable \
             capacity that shows up quickly once an opportunity appears.",
        ),
        (
            PrimaryFactor::Order,
            "Your energy is low across the board, yet your latent strength is **Order (O)** ($O$ points). \
             It is a hidden grain that lets you organize your surroundings and find predictable stability, \
             a valuable capacity for building calm structure.",
        ),
        (
            PrimaryFactor::Inquiry,
            "Your energy is low across the board, yet your latent strength is **Inquiry (I)** ($I$ points). \
             It is a hidden grain that lets you reflect on what lies behind events and grasp their essence, \
             a valuable capacity for drawing out deep understanding.",
        ),
        (
            PrimaryFactor::Relation,
            "Your energy is low across the board, yet your latent strength is **Relation (R)** ($R$ points). \
             It is a hidden grain that lets you connect emotionally with others and create harmony, \
             a valuable capacity for warm communication.",
        ),
    ],
    composite: [
        (
            "AI",
            "The first grain in your PAIOR profile is a strong union of **Drive (A)** and **Inquiry (I)**. \
             You reflect deeply on how the world works until you grasp its essence (I), then translate that \
             insight into real results without hesitation (A).",
        ),
        (
            "AO",
            "Your PAIOR profile combines the momentum of **Drive (A)** with the structure of **Order (O)**. \
             You move quickly toward a goal (A) while keeping every step inside a precise set of rules and \
             systems of your own (O), leaving no room for error.",
        ),
        (
            "AR",
            "Your PAIOR profile joins the energy of **Drive (A)** with the warmth of **Relation (R)**. \
             Your strongest action (A) emerges when you move toward a goal together with others (R), stepping \
             forward to help people grow or to achieve something as a community.",
        ),
        (
            "IO",
            "Your PAIOR profile combines the intellectual depth of **Inquiry (I)** with the structure of \
             **Order (O)**. You dig into the principles behind events to find what is true (I), then place \
             those findings neatly within a logical framework of your own (O).",
        ),
        (
            "IR",
            "Your PAIOR profile joins the insight of **Inquiry (I)** with the empathy of **Relation (R)**. \
             You read the invisible psychological currents between people sharply (I) and use that \
             understanding to bring harmony or offer help that truly matters (R).",
        ),
        (
            "OR",
            "Your PAIOR profile shows a graceful harmony of **Order (O)** and **Relation (R)**. \
             You treasure emotional bonds with the people around you (R) while carefully keeping those \
             relationships and surroundings stable and well organized (O).",
        ),
        (
            "AIO",
            "Your PAIOR profile forms a complete triangle of **Drive (A)**, **Order (O)** and **Inquiry (I)**. \
             You set strategy with an eye that sees through to the essence (I), then carry it out at once (A) \
             inside a system that never loses its shape (O).",
        ),
        (
            "AOR",
            "Your PAIOR profile combines the energy of **Drive (A)**, the stability of **Order (O)** and the \
             embrace of **Relation (R)**. You build emotional bonds with people (R), keep a fair and \
             systematic order (O), and lead the way toward shared goals (A).",
        ),
        (
            "AIR",
            "Your PAIOR profile links **Drive (A)**, the essential grasp of **Inquiry (I)** and the emotional \
             attunement of **Relation (R)** into one living whole. You understand people and the world deeply \
             (I), communicate within it (R), and bring what you aim for into concrete action (A).",
        ),
        (
            "IOR",
            "Your PAIOR profile combines the stability of **Order (O)**, the sharpness of **Inquiry (I)** and \
             the harmony of **Relation (R)**. You sense the subtle flow within relationships (R), analyze its \
             causes (I), and build a structured environment where everyone can feel at ease (O).",
        ),
    ],
};

pub static CHART_TEMPLATES: TemplateTable = TemplateTable {
    single: [
        (
            PrimaryFactor::Drive,
            "On the rose chart your Drive (A) segment reaches out with overwhelming size. It shows visually \
             that direct action driven by your own will, more than careful calculation or other people's \
             eyes, is the profile that defines you.",
        ),
        (
            PrimaryFactor::Order,
            "On the rose chart your Order (O) segment extends firmly and solidly. It shows visually the \
             'Meticulous Architect' who feels at peace only when the situation is under control and \
             everything is in its place.",
        ),
        (
            PrimaryFactor::Inquiry,
            "On the rose chart your Inquiry (I) segment reaches sharply and deeply outward from the center. \
             It shows visually the 'Pattern Tracker' who finds the key pattern among complex information and \
             feels intellectual joy in completing a logical system of their own.",
        ),
        (
            PrimaryFactor::Relation,
            "On the rose chart your Relation (R) segment spreads softly and widely. It shows visually the \
             'Warm Connector' who values 'together' over solitary achievement and reads other people's \
             hearts with empathy.",
        ),
    ],
    low_energy: [
        (
            PrimaryFactor::Drive,
            "Among the shaded segments of the rose chart, Drive (A) stands out at $A$ points. It is potential \
             not yet unfolded, a grain that can emerge when the right environment and opportunity arrive.",
        ),
        (
            PrimaryFactor::Order,
            "Among the shaded segments of the rose chart, Order (O) stands out at $O$ points. It is potential \
             not yet unfolded, a grain that can emerge when a stable framework is needed.",
        ),
        (
            PrimaryFactor::Inquiry,
            "Among the shaded segments of the rose chart, Inquiry (I) stands out at $I$ points. It is potential \
             not yet unfolded, a grain that can emerge when deep understanding is needed.",
        ),
        (
            PrimaryFactor::Relation,
            "Among the shaded segments of the rose chart, Relation (R) stands out at $R$ points. It is potential \
             not yet unfolded, a grain that can emerge when a warm connection is needed.",
        ),
    ],
    composite: [
        (
            "AI",
            "On the rose chart your A ($A$) and I ($I$) segments reach out sharply and firmly. Beyond mere \
             action or vague thinking, it shows the 'Intellectual Pioneer' advancing strategically toward \
             points of conviction.",
        ),
        (
            "AO",
            "On the rose chart your A ($A$) and O ($O$) segments extend strongly and symmetrically. Rather than \
             simply breaking through, it shows the 'Precise Strategist' who raises the odds under a thorough plan.",
        ),
        (
            "AR",
            "On the rose chart your A ($A$) and R ($R$) segments blend dynamically. It shows the 'Passionate \
             Helper' who steps up first for a shared victory rather than personal success.",
        ),
        (
            "IO",
            "On the rose chart your I ($I$) and O ($O$) segments form an orderly, deep shape. It shows the \
             'Cool-headed Analyst' who feels settled when knowledge is structured into a clear system.",
        ),
        (
            "IR",
            "On the rose chart your I ($I$) and R ($R$) segments extend delicately and flexibly. It shows the \
             'Insightful Mediator' who seeks sincere connection built on a deep understanding of people.",
        ),
        (
            "OR",
            "On the rose chart your O ($O$) and R ($R$) segments form a soft yet broad shape. It shows the \
             'Caring Architect' who tidies the disorder around them into a safe enclosure where everyone \
             feels comfortable.",
        ),
        (
            "AIO",
            "On the rose chart your A, O and I segments are spread widely and evenly. Beyond working hard, it \
             shows the 'Flawless Pioneer' who knows why (I), designs how (O), and finishes for certain (A).",
        ),
        (
            "AOR",
            "On the rose chart your A, O and R segments show a harmonious, dynamic balance. It shows the \
             'Trusted Leader' who gives people predictable stability while producing certain results.",
        ),
        (
            "AIR",
            "On the rose chart your A, I and R segments reach out vividly. Beyond theorist or activist, it \
             shows the 'Dynamic Visionary' who moves hearts and puts essential change into action.",
        ),
        (
            "IOR",
            "On the rose chart your O, I and R segments show a delicate, balanced spread. It shows the \
             'Thoughtful Coordinator' who prevents confusion in a community through insight and builds a \
             warm kind of order.",
        ),
    ],
};

/// Positive reading of each dynamic, used for the secondary block and details.
pub const REFRAME_TEMPLATES: [(SecondaryFactor, &str); 9] = [
    (
        SecondaryFactor::Struggle,
        "your sincere stance of carrying the full weight alone to finish what you set out to do. PAIOR reads \
         this not as fatigue or overwork but as your own noble devotion, bearing every burden to reach your \
         goal. We deeply support the devotion held in that fierce and honest effort.",
    ),
    (
        SecondaryFactor::Rebellion,
        "a noble devotion to keep your own initiative under outside pressure. PAIOR reads this not as mere \
         resistance but as your sincere stance of designing your own path without being swayed by others' \
         expectations. We deeply support the care you have taken to protect your sense of ownership.",
    ),
    (
        SecondaryFactor::Perfection,
        "a noble devotion to keep and complete your order without the slightest error. PAIOR reads this not \
         as a compulsion that binds you but as your sincere stance of tending your world cleanly to build a \
         safe enclosure. We deeply support the heart that has struggled alone to build an unshaken structure \
         for life.",
    ),
    (
        SecondaryFactor::Stubbornness,
        "a noble devotion to guard to the end the essence and truth you have discovered. PAIOR reads this \
         not as obstinacy but as your sincere stance of protecting values you cannot compromise and quietly \
         walking your own road. We deeply support the patience with which you have held on to truths others \
         cannot see.",
    ),
    (
        SecondaryFactor::Distraction,
        "a noble devotion to calm the unease found in your surroundings and relationships. PAIOR reads this \
         not as scattered attention but as your sincere stance of tidying the commotion around you to recover \
         peace of mind. We deeply support your efforts to understand the situation and find stability.",
    ),
    (
        SecondaryFactor::Contentment,
        "a noble devotion to fully acknowledge the present moment and conserve your energy. PAIOR reads this \
         not as idleness but as your sincere stance of valuing what you have achieved and making room for the \
         next challenge. We deeply support your wisdom in moving at your own pace without overreaching.",
    ),
    (
        SecondaryFactor::Moderation,
        "a noble devotion to keep harmony with those around you and lighten the load. PAIOR reads this not as \
         settling for the ordinary but as your sincere stance of quietly creating a warm balance within \
         relationships. We deeply support the care with which you create comfort together with others.",
    ),
    (
        SecondaryFactor::Dependence,
        "a noble devotion that treasures the value of cooperation and support. PAIOR reads this not as mere \
         reliance but as your sincere stance of trusting the people beside you and moving forward with their \
         strength. We deeply support your wisdom in not shouldering everything alone.",
    ),
    (
        SecondaryFactor::Boredom,
        "your sincere signal of pausing to take in new insight. PAIOR reads this not as whim or weariness but \
         as a noble devotion to protect a heart worn out from tuning in to others and to refill it with fresh \
         energy. We deeply support the generous care with which you have always put others first.",
    ),
];

pub const PEACEFUL_BLOCK: &str = "You are currently in a calm state without any particular psychological \
     overload. No notable psychological dynamics are observed, which means you are maintaining a very stable \
     psychological balance.";

/// Introduces the list of dynamics at or above the high floor.
pub const HIGH_BLOCK_PREFIX: &str = "Among your psychological dynamics (P1 to P9),";

pub const HIGH_BLOCK_SUFFIX: &str = "score 40 or more ('High') and are acting strongly on you right now. \
     This is one face of the **noble devotion** with which you meet life; PAIOR reads every dynamic not as a \
     problem but as a sincere stance of protecting yourself and moving forward.";

/// Introduces the single top dynamic; followed by its reframe text.
pub const TOP_BLOCK_PREFIX: &str = "The dynamic observed in your psychological base (P),";

pub const GENERIC_SECONDARY_BLOCK: &str = "The dynamics observed in your psychological base (P) are one face \
     of the **noble devotion** with which you meet life. PAIOR reads every dynamic not as a problem but as a \
     sincere stance of protecting yourself and moving forward.";

pub const CLOSING_STATEMENT: &str = "This analysis was prepared carefully from your response data. A deeper \
     interpretation and consultation with a professional may be helpful.";

/// Embeds every score placeholder so the summary line always reflects the inputs.
pub const DATA_SUMMARY: &str = "Your report was personalized by matching Drive (A) $A$ pts, Order (O) $O$ \
     pts, Inquiry (I) $I$ pts, Relation (R) $R$ pts and your dynamics (Struggle $P1$ · Rebellion $P2$ · \
     Perfection $P3$ · Stubbornness $P4$ · Distraction $P5$ · Contentment $P6$ · Moderation $P7$ · \
     Dependence $P8$ · Boredom $P9$ pts).";

pub const GUIDE_PEACEFUL: &str = "Build on your temperamental strength ({strength}) while keeping your current \
     calm state of mind, and you will bring an even more balanced learning energy to bear.";

pub const GUIDE_ELEVATED: &str = "Build on your temperamental strength ({strength}) while recognizing and \
     managing the dynamics that are active right now ({dynamics}), and you will bring an even more balanced \
     learning energy to bear.";

pub const GUIDE_NORMAL: &str = "Build on your temperamental strength ({strength}) while noticing and managing \
     your current dynamics, and you will bring an even more balanced learning energy to bear.";

pub fn reframe(factor: SecondaryFactor) -> &'static str {
    REFRAME_TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == factor)
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_SECONDARY_BLOCK)
}
