//! Default policy tables. Swapping these changes classification behavior
//! without touching the decision procedure.

use super::rules::{Exempt, RuleSpec};

/// Pattern tables for every signal detector. Construct with
/// `PolicyTables::default()` and override fields to inject alternate policy.
pub struct PolicyTables {
    pub technical: &'static [RuleSpec],
    pub non_technical: &'static [RuleSpec],
    pub internship: &'static [RuleSpec],
    pub hard_reject: &'static [RuleSpec],
    pub intern_negation: &'static [RuleSpec],
    pub seniority: &'static [RuleSpec],
    pub experience: &'static [RuleSpec],
    pub degree: &'static [RuleSpec],
    pub location_allowed: &'static [RuleSpec],
    pub location_blocked: &'static [RuleSpec],
}

impl Default for PolicyTables {
    fn default() -> Self {
        Self {
            technical: TECHNICAL,
            non_technical: NON_TECHNICAL,
            internship: INTERNSHIP,
            hard_reject: HARD_REJECT,
            intern_negation: INTERN_NEGATION,
            seniority: SENIORITY,
            experience: EXPERIENCE,
            degree: DEGREE,
            location_allowed: LOCATION_ALLOWED,
            location_blocked: LOCATION_BLOCKED,
        }
    }
}

/// Engineering/technical-role vocabulary.
const TECHNICAL: &[RuleSpec] = &[
    RuleSpec::plain(r"backend|back[\s\-]end"),
    RuleSpec::plain(r"software\s+(?:engineer|developer|dev)\b"),
    RuleSpec::plain(r"\bsde\b"),
    RuleSpec::plain(r"\bswe\b"),
    RuleSpec::plain(r"full[\s\-]?stack"),
    RuleSpec::plain(r"\bapi\b"),
    RuleSpec::plain(r"\brest(?:ful)?\b"),
    RuleSpec::plain(r"\bnode(?:\.?js)?\b"),
    RuleSpec::plain(r"\bpython\b"),
    RuleSpec::unless(r"\bjava\b", Exempt::Ahead(r"\s*script\s*only")),
    RuleSpec::plain(r"\bgo(?:lang)?\b"),
    RuleSpec::plain(r"\brust\b"),
    RuleSpec::plain(r"\bc\+\+"),
    RuleSpec::plain(r"\bc#"),
    RuleSpec::plain(r"\bdjango\b|\bflask\b|\bfastapi\b|\bspring\b|\brails\b"),
    RuleSpec::plain(r"\bdevops\b"),
    RuleSpec::plain(r"\bcloud\s+(?:engineer|intern)\b"),
    RuleSpec::plain(r"platform\s+engineer"),
    RuleSpec::plain(r"\bsre\b|site\s+reliability"),
    RuleSpec::plain(r"data\s+engineer"),
    RuleSpec::plain(r"\bml\s+engineer\b|mlops"),
    RuleSpec::plain(r"\binfrastructure\b"),
    RuleSpec::plain(r"systems?\s+engineer"),
    RuleSpec::plain(r"ui[\s/]ux\s+(?:design\s+)?engineer"),
    RuleSpec::plain(r"product\s+design\s+engineer"),
    RuleSpec::plain(r"\bdatabase\b|\bpostgres\b|\bmongodb\b"),
    RuleSpec::plain(r"\bmicroservices?\b"),
    RuleSpec::plain(r"\bdocker\b|\bkubernetes\b|\bk8s\b"),
];

/// HR/marketing/sales/design/support vocabulary. Design terms are exempt when
/// "engineer" follows, so engineer-compound titles stay technical.
const NON_TECHNICAL: &[RuleSpec] = &[
    RuleSpec::plain(r"\b(?:hr|human\s+resources?)(?:\s*(?:intern|role|position))?\b"),
    RuleSpec::plain(r"\bmarketing(?:\s*(?:intern|role|position))?\b"),
    RuleSpec::plain(r"\bsales(?:\s*(?:intern|role|position|development))?\b"),
    RuleSpec::plain(r"\bcontent\s*(?:writer|intern|marketing|creator)\b"),
    RuleSpec::plain(r"\bgrowth\s*(?:intern|hacker|marketing)\b"),
    RuleSpec::plain(r"\bseo(?:\s*(?:intern|specialist))?\b"),
    RuleSpec::plain(r"\bsocial\s+media\b"),
    RuleSpec::unless(r"\bui[\s/]ux\b", Exempt::After("engineer")),
    RuleSpec::unless(r"\bux\s+(?:design(?:er)?|research(?:er)?)\b", Exempt::After("engineer")),
    RuleSpec::plain(r"\bgraphic\s+design(?:er)?\b"),
    RuleSpec::unless(r"\bproduct\s+design(?:er)?\b", Exempt::After("engineer")),
    RuleSpec::plain(r"\bcopywrit(?:er|ing)\b"),
    RuleSpec::plain(r"\bbusiness\s+development\b"),
    RuleSpec::plain(r"\bfinance\s+intern\b|\baccounting\s+intern\b"),
    RuleSpec::plain(r"\brecruiter\b|\btalent\s+acquisition\b"),
    RuleSpec::plain(r"\bcustomer\s+success\b|\baccount\s+manager\b"),
];

/// Positive internship signals.
const INTERNSHIP: &[RuleSpec] = &[
    RuleSpec::plain(r"\bintern(?:ship)?\b"),
    RuleSpec::plain(r"\btrainee\b"),
    RuleSpec::plain(r"\bapprentice(?:ship)?\b"),
    RuleSpec::plain(r"\bco[\s\-]?op\b"),
    RuleSpec::plain(r"\bpracticum\b"),
    RuleSpec::plain(r"summer\s+(?:intern|program|position|role|opportunity)"),
    RuleSpec::plain(r"winter\s+(?:intern|program|position|role|opportunity)"),
    RuleSpec::plain(r"intern\s*(?:to\s*)?(?:ppo|full[\s\-]?time\s+conversion|convert)"),
    RuleSpec::plain(r"full[\s\-]?time\s+intern\s+conversion"),
];

/// Disqualifiers that win even when "intern" appears elsewhere in the text.
const HARD_REJECT: &[RuleSpec] = &[
    RuleSpec::plain(r"\bnew\s+grad(?:uate)?\b"),
    RuleSpec::plain(r"graduate\s+(?:program|hire|recruitment|role)\b"),
    RuleSpec::plain(r"campus\s+(?:hire|recruitment|program)"),
    RuleSpec::plain(r"full[\s\-]?time\s+only"),
    RuleSpec::plain(r"no\s+freshers?\b"),
    RuleSpec::plain(r"no\s+students?\b"),
    RuleSpec::plain(r"not\s+(?:open\s+to\s+)?freshers?"),
    RuleSpec::plain(r"experienced\s+(?:professional|candidate|engineer|developer)"),
    RuleSpec::unless(r"\b0\s*[-–]\s*2\s*years?\b", Exempt::After("intern")),
    RuleSpec::plain(r"no\s+internship"),
    RuleSpec::plain(r"not\s+(?:an?\s+)?internship"),
    RuleSpec::plain(r"this\s+is\s+not\s+(?:an?\s+)?intern"),
];

/// Negation word immediately preceding "internship".
const INTERN_NEGATION: &[RuleSpec] = &[
    RuleSpec::plain(r"(?:no|not|isn't|is\s+not|without|non)[\s\-]+internship"),
];

/// Seniority titles and numbered levels.
const SENIORITY: &[RuleSpec] = &[
    RuleSpec::plain(r"\bsenior\b"),
    RuleSpec::plain(r"\bstaff\b"),
    RuleSpec::plain(r"\bprincipal\b"),
    RuleSpec::plain(
        r"\blead\s*(?:software|backend|frontend|full|data|ml|sre|devops|platform|engineer|developer)?\b",
    ),
    RuleSpec::plain(r"\bdirector\b"),
    RuleSpec::plain(r"\bmanager\b"),
    RuleSpec::plain(r"\bvp\b|vice\s+president"),
    RuleSpec::plain(r"\bhead\s+of\b"),
    RuleSpec::plain(r"\barchitect\b"),
    RuleSpec::plain(r"\bsde[\s\-]?(?:[2-9]|ii+)\b"),
    RuleSpec::plain(r"\bswe[\s\-]?(?:[2-9]|ii+)\b"),
    RuleSpec::plain(r"\bl[\s\-]?[4-9]\b"),
    RuleSpec::plain(r"\be[\s\-]?[4-9]\b"),
    RuleSpec::plain(r"\bic[\s\-]?[3-9]\b"),
    RuleSpec::plain(r"\blevel\s+[4-9]\b"),
    RuleSpec::plain(r"\bgrade\s+[4-9]\b"),
    RuleSpec::plain(r"\bband\s+[5-9]\b"),
];

/// Experience requirements that rule out an entry-level role.
const EXPERIENCE: &[RuleSpec] = &[
    RuleSpec::plain(r"\b[2-9]\+\s*years?"),
    RuleSpec::plain(r"\b1[0-9]\+\s*years?"),
    RuleSpec::plain(r"\b[2-9]\s*[-–]\s*\d+\s*years?"),
    RuleSpec::plain(r"minimum\s+[2-9]\s*years?"),
    RuleSpec::plain(r"at\s+least\s+[2-9]\s*years?"),
    RuleSpec::plain(r"\b[2-9]\s*years?\s*(?:of\s+)?(?:exp(?:erience)?|work)"),
    RuleSpec::plain(r"\b[2-9]\s*years?\s+industry"),
    RuleSpec::plain(r"industry\s+experience"),
    RuleSpec::plain(r"proven\s+track\s+record"),
    RuleSpec::plain(r"extensive\s+experience"),
    RuleSpec::plain(r"strong\s+professional\s+experience"),
    RuleSpec::plain(r"production\s+experience"),
    RuleSpec::plain(r"system\s+design\s+experience"),
    RuleSpec::plain(r"deep\s+(?:expertise|experience|knowledge)"),
    RuleSpec::plain(r"significant\s+experience"),
    RuleSpec::plain(r"\bseasoned\b"),
];

/// Advanced-degree requirements and past-cohort exclusions.
const DEGREE: &[RuleSpec] = &[
    RuleSpec::plain(r"\bph\.?d\b|doctorate|doctoral\s+degree"),
    RuleSpec::plain(r"masters?\s+(?:degree\s+)?(?:required|preferred|must|only)"),
    RuleSpec::plain(r"must\s+have\s+(?:a\s+)?masters?"),
    RuleSpec::plain(r"postgraduate|post[\s\-]graduate"),
    RuleSpec::plain(r"\bmba\b"),
    RuleSpec::plain(r"graduating\s+in\s+2024\b"),
    RuleSpec::plain(r"2024\s+graduates?\s+only"),
];

/// India, remote phrasing, and Indian cities.
const LOCATION_ALLOWED: &[RuleSpec] = &[
    RuleSpec::plain(r"\bindia\b"),
    RuleSpec::plain(r"\bremote\b"),
    RuleSpec::plain(r"work[\s\-]from[\s\-]home|\bwfh\b"),
    RuleSpec::plain(r"\banywhere\b|\bworldwide\b|\bglobal(?:ly)?\b"),
    RuleSpec::plain(r"bengaluru|bangalore|\bblr\b"),
    RuleSpec::plain(r"mumbai|delhi|\bncr\b|new\s+delhi"),
    RuleSpec::plain(r"hyderabad|pune|chennai|noida"),
    RuleSpec::plain(r"gurugram|gurgaon|kolkata|ahmedabad|kochi"),
    RuleSpec::plain(r"kottayam|trivandrum|thiruvananthapuram"),
    RuleSpec::plain(r"indore|jaipur|bhopal|coimbatore|nagpur"),
];

/// Non-India regions and cities, hybrid, and work-authorization phrasing.
/// Hybrid is blocked unconditionally: it implies mandatory physical presence.
const LOCATION_BLOCKED: &[RuleSpec] = &[
    RuleSpec::plain(r"\busa\b|\bus\s+only\b|united\s+states|\bamerica\b"),
    RuleSpec::plain(r"\buk\b|united\s+kingdom|\bbritain\b|\bengland\b"),
    RuleSpec::plain(r"\bcanada\b|\baustralia\b|\bsingapore\b"),
    RuleSpec::plain(r"\bgermany\b|\bfrance\b|\bnetherlands\b"),
    RuleSpec::plain(r"\beurope\b|\bemea\b|\blatam\b|\bapac\b"),
    RuleSpec::plain(r"san\s+francisco|\bsf\s+bay\b|new\s+york|\bnyc\b"),
    RuleSpec::plain(r"\bseattle\b|\baustin\b|\bboston\b|\bchicago\b"),
    RuleSpec::plain(r"\blondon\b|\btoronto\b|\bvancouver\b|\bdubai\b"),
    RuleSpec::plain(r"\bhybrid\b"),
    RuleSpec::plain(r"visa\s+sponsorship|work\s+authoriz"),
    RuleSpec::plain(r"authorized\s+to\s+work\s+in\s+the\s+us"),
    RuleSpec::unless(
        r"must\s+be\s+(?:based|located|residing)\s+in\s+",
        Exempt::Ahead("india"),
    ),
    RuleSpec::unless(r"onsite\s+(?:required|only|mandatory)", Exempt::After("india")),
];
