//! The hand-authored knowledge base.
//!
//! Two static tables drive all offline answers: [`KNOWLEDGE_CARDS`] pairs a
//! scripture reference with a short idea, summary and moral, and
//! [`CONCEPT_CARDS`] describes named spiritual concepts. Table order is
//! significant: every ranking in [`crate::matcher`] breaks ties by position.

use serde::Serialize;

use crate::reference::Tradition;

/// A scripture reference with its idea, summary, moral and match keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeCard {
    pub tradition: Tradition,
    /// `2:47` for Gita and Quran, `James 1:5` for the Bible.
    pub reference: &'static str,
    pub idea: &'static str,
    pub summary: &'static str,
    pub moral: &'static str,
    pub keywords: &'static [&'static str],
}

impl KnowledgeCard {
    /// `"Gita 2:47"`, `"Bible James 1:5"`.
    pub fn citation(&self) -> String {
        format!("{} {}", self.tradition, self.reference)
    }
}

/// A named concept with explanation, practice step and a related verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptCard {
    pub title: &'static str,
    pub explanation: &'static str,
    pub summary: &'static str,
    pub moral: &'static str,
    pub practice: &'static str,
    pub keywords: &'static [&'static str],
    pub related_reference: &'static str,
}

pub static KNOWLEDGE_CARDS: &[KnowledgeCard] = &[
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "2:47",
        idea: "Do your duty with full effort, but do not become attached to the final result.",
        summary: "Focus on right action, not anxiety about outcomes.",
        moral: "Effort is your responsibility; outcome is not always in your control.",
        keywords: &["duty", "karma", "work", "result", "action", "focus", "discipline"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "2:50",
        idea: "Yoga is excellence in action, where wisdom guides effort and reduces inner conflict.",
        summary: "Spirituality can be practiced through quality work and balanced judgment.",
        moral: "Skill and ethics together create meaningful success.",
        keywords: &["yoga", "skill", "action", "wisdom", "balance", "work"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "2:70",
        idea: "A stable person remains peaceful even when desires flow in continuously.",
        summary: "Peace belongs to those who are not ruled by cravings.",
        moral: "Contentment protects the mind from endless restlessness.",
        keywords: &["desire", "peace", "contentment", "mind", "stability", "calm"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "3:19",
        idea: "Act with responsibility and without attachment to personal gain.",
        summary: "Detached action keeps the heart pure and the mind clear.",
        moral: "Serve through action, not ego.",
        keywords: &["detachment", "service", "responsibility", "action", "ego"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "4:7",
        idea: "Whenever righteousness declines, divine guidance appears to restore moral order.",
        summary: "Truth and justice are never permanently lost.",
        moral: "Stand for dharma even in difficult times.",
        keywords: &["dharma", "justice", "truth", "righteous", "protection"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "6:5",
        idea: "Elevate yourself through self-discipline rather than self-neglect.",
        summary: "Your own mind can be your best helper or worst enemy.",
        moral: "Self-mastery creates inner strength.",
        keywords: &["mind", "self", "discipline", "growth", "control", "improve"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "6:26",
        idea: "When the mind wanders, gently bring it back with patience and awareness.",
        summary: "Meditation is repeated returning, not instant perfection.",
        moral: "Consistency matters more than intensity.",
        keywords: &["meditation", "mind", "focus", "attention", "patience", "practice"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "12:13",
        idea: "The true devotee avoids hatred and lives with compassion and humility.",
        summary: "Spiritual maturity is seen through kindness and ego reduction.",
        moral: "Compassion is higher than pride.",
        keywords: &["compassion", "kindness", "devotion", "humility", "love"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "17:15",
        idea: "Speech becomes spiritual when it is truthful, gentle, beneficial, and self-controlled.",
        summary: "Words shape karma, relationships, and inner purity.",
        moral: "Speak to heal, not to harm.",
        keywords: &["speech", "truth", "gentle", "communication", "words", "self-control"],
    },
    KnowledgeCard {
        tradition: Tradition::Gita,
        reference: "18:66",
        idea: "Surrendering deeply to the Divine dissolves fear, guilt, and confusion.",
        summary: "Spiritual trust gives courage beyond intellectual doubt.",
        moral: "Let faith carry what ego cannot.",
        keywords: &["surrender", "faith", "trust", "fear", "freedom", "devotion"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "James 1:5",
        idea: "If you seek wisdom sincerely, ask God and keep an open heart.",
        summary: "Wisdom grows through prayer, humility, and learning.",
        moral: "Asking for guidance is strength, not weakness.",
        keywords: &["wisdom", "guidance", "understanding", "pray", "decision"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "John 13:34",
        idea: "Love is the central commandment and visible proof of spiritual maturity.",
        summary: "Authentic faith is recognized through practical love.",
        moral: "Love is not optional; it is foundational.",
        keywords: &["love", "commandment", "care", "service", "community"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Matthew 5:9",
        idea: "Peacemakers are honored because they heal conflict instead of spreading it.",
        summary: "Peace-building is active moral leadership.",
        moral: "Choose reconciliation over revenge.",
        keywords: &["peace", "conflict", "forgive", "reconcile", "harmony"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Matthew 6:34",
        idea: "Do not let tomorrow steal today’s strength through excessive worry.",
        summary: "Anxiety shrinks when attention returns to present responsibilities.",
        moral: "Handle today faithfully; tomorrow will unfold in time.",
        keywords: &["worry", "anxiety", "future", "present", "trust"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Proverbs 3:5",
        idea: "Trust beyond your limited understanding and walk with faith.",
        summary: "Faith gives direction when certainty is missing.",
        moral: "Trust and humility protect against arrogance.",
        keywords: &["faith", "trust", "guidance", "future", "fear"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Proverbs 15:1",
        idea: "Gentle speech can calm anger and prevent conflict from escalating.",
        summary: "Tone often matters as much as content.",
        moral: "Respond softly when emotions are high.",
        keywords: &["speech", "anger", "gentle", "conflict", "communication"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Philippians 4:6",
        idea: "Replace anxious loops with prayer, gratitude, and intentional trust.",
        summary: "Peace grows when worry is converted into surrender and gratitude.",
        moral: "Prayer can transform panic into perspective.",
        keywords: &["anxiety", "prayer", "gratitude", "peace", "trust"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Galatians 6:9",
        idea: "Do not quit doing good even when results seem delayed.",
        summary: "Faithful consistency eventually bears fruit.",
        moral: "Perseverance is silent strength.",
        keywords: &["perseverance", "good", "patience", "consistency", "hope"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "Ephesians 4:32",
        idea: "Kindness and forgiveness heal hearts and communities.",
        summary: "Mercy is stronger than resentment.",
        moral: "Forgiveness frees both giver and receiver.",
        keywords: &["forgive", "kindness", "mercy", "compassion", "healing"],
    },
    KnowledgeCard {
        tradition: Tradition::Bible,
        reference: "1 Corinthians 13:4",
        idea: "True love is patient, humble, and enduring under pressure.",
        summary: "Love is a discipline of character, not just emotion.",
        moral: "Patience is one of love’s strongest forms.",
        keywords: &["love", "patience", "humility", "character", "enduring"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "1:1",
        idea: "Begin with awareness of Divine mercy and compassion.",
        summary: "Spiritual life starts with gratitude and mercy-consciousness.",
        moral: "Lead with compassion in every action.",
        keywords: &["mercy", "compassion", "beginning", "gratitude", "rahman"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "2:153",
        idea: "Seek strength through patience and prayer in moments of hardship.",
        summary: "Endurance and spiritual discipline create resilience.",
        moral: "Patience is active trust, not passive waiting.",
        keywords: &["patience", "prayer", "strength", "hardship", "resilience"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "2:286",
        idea: "A person is not burdened beyond capacity; trials are matched with ability.",
        summary: "Hardship does not mean abandonment; it can build resilience.",
        moral: "You are stronger than your current difficulty.",
        keywords: &["hardship", "struggle", "strength", "patience", "resilience"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "3:159",
        idea: "Lead with gentleness, forgiveness, and consultation rather than harshness.",
        summary: "Wise leadership combines mercy with collective thinking.",
        moral: "Soft character builds strong communities.",
        keywords: &["leadership", "gentle", "forgive", "consultation", "community"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "13:28",
        idea: "Hearts become calm through remembrance of the Divine.",
        summary: "Spiritual remembrance steadies emotional turbulence.",
        moral: "Inner peace grows from consistent remembrance.",
        keywords: &["peace", "heart", "remembrance", "calm", "spiritual"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "16:90",
        idea: "God commands justice, excellence, and generosity, while forbidding oppression.",
        summary: "Ethical life requires fairness and active goodness.",
        moral: "Justice and kindness must walk together.",
        keywords: &["justice", "kindness", "ethics", "generosity", "fairness"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "49:13",
        idea: "Human diversity is meant for mutual recognition, not superiority.",
        summary: "Honor is based on character, not identity labels.",
        moral: "Respect people beyond race, tribe, or status.",
        keywords: &["diversity", "respect", "equality", "humanity", "unity"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "94:5",
        idea: "Ease can emerge with hardship when one continues with trust and patience.",
        summary: "Difficult seasons are not permanent.",
        moral: "Hope and patience are practical forms of faith.",
        keywords: &["difficulty", "ease", "hope", "patience", "stress"],
    },
    KnowledgeCard {
        tradition: Tradition::Quran,
        reference: "103:1",
        idea: "Time is precious, and success belongs to those who combine faith, good deeds, and truth.",
        summary: "Life quality depends on values, actions, and disciplined time use.",
        moral: "Use time with purpose and integrity.",
        keywords: &["time", "discipline", "faith", "good deeds", "truth"],
    },];

pub static CONCEPT_CARDS: &[ConceptCard] = &[
    ConceptCard {
        title: "Karma Yoga",
        explanation: "Karma Yoga means performing duties sincerely without emotional dependence on rewards. It builds steady focus and reduces anxiety.",
        summary: "Work with excellence, release result-obsession.",
        moral: "Character is built by right effort, not by instant reward.",
        practice: "Before work, set intention: \"I will give my best and accept outcomes calmly.\"",
        keywords: &["karma yoga", "karma", "duty", "result", "action", "work"],
        related_reference: "Gita 2:47",
    },
    ConceptCard {
        title: "Dharma",
        explanation: "Dharma is right conduct based on responsibility, ethics, and context. It asks: what is the right action here?",
        summary: "Dharma is responsibility aligned with truth and fairness.",
        moral: "Do what is right, even when it is difficult.",
        practice: "In decisions, ask: \"Is this honest, fair, and helpful?\"",
        keywords: &["dharma", "righteous", "ethics", "responsibility", "right"],
        related_reference: "Gita 3:30",
    },
    ConceptCard {
        title: "Bhakti",
        explanation: "Bhakti is devotion expressed through humility, gratitude, and loving remembrance of the Divine.",
        summary: "Devotion transforms ego into compassion.",
        moral: "A soft heart and steady faith bring inner peace.",
        practice: "Spend 5 minutes daily in gratitude and prayerful reflection.",
        keywords: &["bhakti", "devotion", "faith", "love", "prayer"],
        related_reference: "Gita 12:13",
    },
    ConceptCard {
        title: "Jnana (Wisdom Path)",
        explanation: "The wisdom path uses inquiry, discrimination, and reflection to separate lasting truth from temporary appearances.",
        summary: "Right understanding reduces confusion and ego-driven reactions.",
        moral: "Clarity grows when you question assumptions honestly.",
        practice: "Before reacting, ask: \"What is truly important here?\"",
        keywords: &["jnana", "wisdom", "knowledge", "truth", "understanding", "viveka"],
        related_reference: "Gita 4:38",
    },
    ConceptCard {
        title: "Detachment",
        explanation: "Detachment is not indifference; it is caring deeply while not being emotionally controlled by outcomes.",
        summary: "Detached effort keeps motivation strong and anxiety low.",
        moral: "Be committed to effort, not chained to outcome.",
        practice: "Set process goals daily and review effort before result.",
        keywords: &["detachment", "attachment", "result", "anxiety", "balance", "equanimity"],
        related_reference: "Gita 2:70",
    },
    ConceptCard {
        title: "Seva (Selfless Service)",
        explanation: "Seva means serving others with humility and sincerity, without demanding recognition.",
        summary: "Service transforms spirituality into social goodness.",
        moral: "Greatness is measured by contribution, not attention.",
        practice: "Do one helpful action daily without announcing it.",
        keywords: &["seva", "service", "selfless", "help", "humanity", "duty"],
        related_reference: "Gita 3:19",
    },
    ConceptCard {
        title: "Inner Peace",
        explanation: "Inner peace comes from disciplined thought, forgiveness, and trust in a higher purpose.",
        summary: "Peace is practiced, not passively received.",
        moral: "Control response, not everything around you.",
        practice: "Pause before reacting: breathe, then respond from values.",
        keywords: &["peace", "calm", "anger", "stress", "patience", "forgive"],
        related_reference: "Matthew 5:9",
    },
    ConceptCard {
        title: "Forgiveness",
        explanation: "Forgiveness does not deny hurt; it releases the cycle of revenge and restores inner freedom.",
        summary: "Forgiveness protects the heart from bitterness.",
        moral: "Mercy is moral courage.",
        practice: "Name one resentment and consciously release retaliation thoughts.",
        keywords: &["forgive", "forgiveness", "mercy", "hurt", "resentment", "healing"],
        related_reference: "Ephesians 4:32",
    },
    ConceptCard {
        title: "Faith and Trust",
        explanation: "Faith is confidence in Divine wisdom even when immediate evidence is incomplete.",
        summary: "Faith gives direction when certainty is unavailable.",
        moral: "Trust can steady the mind through uncertainty.",
        practice: "When fearful, write one worry and one trust-based action.",
        keywords: &["faith", "trust", "belief", "uncertainty", "future", "hope"],
        related_reference: "Proverbs 3:5",
    },
    ConceptCard {
        title: "Sabr (Patient Endurance)",
        explanation: "Sabr combines emotional restraint, perseverance, and trust during pressure.",
        summary: "Patience is disciplined strength over time.",
        moral: "Steady endurance often wins long battles.",
        practice: "In stressful moments, pause, breathe, and choose the next right step.",
        keywords: &["sabr", "patience", "endurance", "difficulty", "struggle", "steadfast"],
        related_reference: "Quran 2:153",
    },
    ConceptCard {
        title: "Tawakkul (Reliance on God)",
        explanation: "Tawakkul means taking practical action while trusting Divine wisdom for final outcomes.",
        summary: "Do your best, then place outcomes in God’s care.",
        moral: "Effort and trust are partners, not opposites.",
        practice: "Act fully, then mentally release fear of what you cannot control.",
        keywords: &["tawakkul", "reliance", "trust", "god", "outcome", "effort"],
        related_reference: "Quran 3:159",
    },
    ConceptCard {
        title: "Gratitude",
        explanation: "Gratitude trains the mind to notice grace and possibility, reducing negativity bias.",
        summary: "A grateful heart sees abundance even during challenge.",
        moral: "Gratitude turns ordinary life into meaningful life.",
        practice: "List three blessings every evening and one way to honor them.",
        keywords: &["gratitude", "thankful", "blessing", "contentment", "joy"],
        related_reference: "Quran 1:1",
    },
    ConceptCard {
        title: "Right Speech",
        explanation: "Right speech is truthful, gentle, and beneficial. It avoids harshness, gossip, and ego-driven words.",
        summary: "Language can either heal trust or damage it.",
        moral: "Speak with responsibility and compassion.",
        practice: "Before speaking, ask: Is it true, kind, and useful?",
        keywords: &["speech", "communication", "truth", "gentle", "words", "anger"],
        related_reference: "Gita 17:15",
    },];

/// All knowledge cards of one tradition, in table order.
pub fn cards_for(tradition: Tradition) -> impl Iterator<Item = &'static KnowledgeCard> {
    KNOWLEDGE_CARDS
        .iter()
        .filter(move |card| card.tradition == tradition)
}
