//! The clause template set: every sentence of the agreement lives here.
//!
//! [`assemble`] resolves all conditional wording against a
//! [`ContractRecord`] and returns a [`Document`]. Format adapters never add
//! or alter wording, so every output format carries the same text.

use chrono::NaiveDate;

use nda_core::{ContractRecord, ContractType, Counterparty, Duration};

use crate::document::{Block, Document, ListStyle, Run};

/// Revision of the clause catalogue below.
pub const CLAUSE_SET_VERSION: &str = "2024.1";

pub const TITLE: &str = "NON-DISCLOSURE AGREEMENT";
pub const SUBTITLE: &str = "(Compliant with South African Law)";

const COMPANY_CAPACITY: &str = "a company duly incorporated in accordance with the laws of the Republic of South Africa";
const PARTIES_DEFINITION: &str = "(The Company and the Recipient may be referred to individually as a \"Party\" and collectively as the \"Parties\")";

const RECITAL_ASSETS: &str = "WHEREAS, the Company possesses certain confidential and proprietary information, trade secrets, and intellectual property that constitute valuable business assets;";
const RECITAL_LEGISLATION: &str = "WHEREAS, the Parties wish to protect the confidentiality of such information in accordance with the laws of the Republic of South Africa, including but not limited to the Constitution of South Africa (1996), Labour Relations Act 66 of 1995, Basic Conditions of Employment Act 75 of 1997, Protection of Personal Information Act 4 of 2013, Competition Act 89 of 1998, and Protected Disclosures Act 26 of 2000;";
const OPERATIVE: &str = "NOW THEREFORE, the Parties agree as follows:";

const DEFINITION_HEADING: &str = "1. DEFINITION OF CONFIDENTIAL INFORMATION";
const DEFINITION_LEAD: &str = "1.1 \"Confidential Information\" shall mean all non-public, proprietary, or confidential information disclosed by the Company to the Recipient, whether orally, in writing, electronically, or by observation, including but not limited to:";
const EXCEPTIONS_LEAD: &str = "1.2 Confidential Information shall not include information that:";
const EXCEPTIONS: [&str; 5] = [
    "Is or becomes publicly available through no breach of this Agreement by the Recipient;",
    "Was rightfully known by the Recipient before disclosure by the Company;",
    "Is rightfully received by the Recipient from a third party without breach of any confidentiality obligation;",
    "Is independently developed by the Recipient without use of or reference to the Confidential Information;",
    "Is required to be disclosed by law, regulation, or court order, provided that the Recipient gives the Company reasonable advance notice of such requirement.",
];

const OBLIGATIONS_HEADING: &str = "2. OBLIGATIONS OF THE RECIPIENT";
const OBLIGATION_ACKNOWLEDGEMENT: &str = "2.1 The Recipient acknowledges that the Confidential Information is proprietary to the Company and constitutes valuable trade secrets.";
const OBLIGATION_NON_DISCLOSURE: &str = "2.2 The Recipient shall not disclose, publish, or otherwise reveal any of the Confidential Information received from the Company to any other party whatsoever except with the specific prior written authorization of the Company.";

const COMPLIANCE_HEADING: &str = "3. CONSTITUTIONAL AND STATUTORY COMPLIANCE";
const COMPLIANCE_POPIA: &str = "3.1 This Agreement complies with the Protection of Personal Information Act 4 of 2013 (POPIA) and other relevant South African legislation.";

const EXECUTION: &str = "IN WITNESS WHEREOF, the Parties have executed this Agreement on the date first written above.";
const SIGNED_AT: &str = "SIGNED AT _________________________ ON _________________________";
const SIGNATURE_LINE: &str = "_________________________________";
const DISCLAIMER_LABEL: &str = "LEGAL DISCLAIMER:";
const DISCLAIMER: &str = " This NDA has been generated to comply with South African law as of 2024. However, legal requirements may change, and specific circumstances may require additional provisions. It is recommended to have this agreement reviewed by a qualified South African attorney before execution.";

const SURVIVAL_FROM_AGREEMENT: &str = "from the date of this Agreement";

// ---------------------------------------------------------------------------
// Phrase table
// ---------------------------------------------------------------------------

/// Wording that varies with the contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
    /// "the Recipient ___ the Company"
    pub relationship: &'static str,
    /// "in the course of ___"
    pub course_of: &'static str,
    /// Anchor of the survival period when post-termination survival applies.
    pub survival_anchor: &'static str,
}

const EMPLOYEE_PHRASES: Phrases = Phrases {
    relationship: "is employed by",
    course_of: "employment",
    survival_anchor: "from the termination of employment",
};

const CONTRACTOR_PHRASES: Phrases = Phrases {
    relationship: "will be engaged by",
    course_of: "the engagement",
    survival_anchor: "from the completion or termination of the contractual relationship",
};

const MUTUAL_PHRASES: Phrases = Phrases {
    relationship: "will be engaged by",
    course_of: "the engagement",
    survival_anchor: SURVIVAL_FROM_AGREEMENT,
};

/// Phrase table entry for `contract_type`.
pub fn phrases(contract_type: ContractType) -> &'static Phrases {
    match contract_type {
        ContractType::Employee => &EMPLOYEE_PHRASES,
        ContractType::Contractor => &CONTRACTOR_PHRASES,
        ContractType::Mutual => &MUTUAL_PHRASES,
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// "15 March 2024" (zero-padded day).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// The full survival sentence, without clause number or final full stop.
pub fn survival_clause(record: &ContractRecord) -> String {
    let period = match record.confidentiality().duration {
        Duration::Indefinite => "indefinitely".to_string(),
        years => format!("for a period of {years}"),
    };
    let anchor = match record.contract_type() {
        ContractType::Employee if !record.confidentiality().survives_post_termination => {
            SURVIVAL_FROM_AGREEMENT
        }
        contract_type => phrases(contract_type).survival_anchor,
    };
    format!("This obligation shall survive {period} {anchor}")
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Resolve the clause set against `record`, dated `agreement_date`.
pub fn assemble(record: &ContractRecord, agreement_date: NaiveDate) -> Document {
    let mut blocks = vec![Block::Title {
        text: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
    }];
    blocks.extend(preamble(record, agreement_date));
    blocks.extend(recitals(record));
    blocks.extend(definition(record));
    blocks.extend(obligations(record));
    blocks.extend(compliance());
    blocks.extend(signatures(record));
    Document { blocks }
}

fn preamble(record: &ContractRecord, agreement_date: NaiveDate) -> Vec<Block> {
    let company = record.company();
    let company_party = Block::Paragraph {
        runs: vec![
            Run::bold(format!("(1) {}", company.name.to_uppercase())),
            Run::plain(format!(
                " (Registration Number: {}), {COMPANY_CAPACITY}, with its registered address at {} \
                 (hereinafter referred to as \"the Company\" or \"Disclosing Party\"), represented herein by {}, {}, \
                 who warrants that he/she has the necessary authority to bind the Company; and",
                company.registration_number,
                company.address,
                company.representative_name,
                company.representative_position,
            )),
        ],
    };

    vec![
        Block::paragraph(format!("THIS AGREEMENT is made on {}", format_date(agreement_date))),
        Block::heading(2, "BETWEEN:"),
        company_party,
        counterparty_party(record),
        Block::paragraph(PARTIES_DEFINITION),
    ]
}

fn counterparty_party(record: &ContractRecord) -> Block {
    let party = record.counterparty();
    let mut details = String::new();
    match party {
        Counterparty::Individual { id_number: Some(id), .. } => {
            details.push_str(&format!(", ID Number: {id}"));
        }
        Counterparty::Company { registration_number: Some(reg), .. } => {
            details.push_str(&format!(" (Registration Number: {reg})"));
        }
        _ => {}
    }
    details.push_str(&format!(
        ", with address at {} (hereinafter referred to as \"the Recipient\" or \"Receiving Party\")",
        party.address()
    ));
    if let Some(employment) = record.employment() {
        details.push_str(&format!(
            ", employed as {} from {}",
            employment.job_title,
            format_date(employment.start_date)
        ));
    }
    details.push('.');

    Block::Paragraph {
        runs: vec![
            Run::bold(format!("(2) {}", party.name().to_uppercase())),
            Run::plain(details),
        ],
    }
}

fn recitals(record: &ContractRecord) -> Vec<Block> {
    let phrases = phrases(record.contract_type());
    vec![
        Block::heading(1, "RECITALS"),
        Block::paragraph(RECITAL_ASSETS),
        Block::paragraph(format!(
            "WHEREAS, the Recipient {} the Company and will have access to such confidential \
             information in the course of {};",
            phrases.relationship, phrases.course_of
        )),
        Block::paragraph(RECITAL_LEGISLATION),
        Block::paragraph(OPERATIVE),
    ]
}

fn definition(record: &ContractRecord) -> Vec<Block> {
    let confidentiality = record.confidentiality();
    let mut items: Vec<String> = confidentiality
        .categories
        .iter()
        .map(|c| format!("{};", c.label()))
        .collect();
    if let Some(extra) = &confidentiality.additional_text {
        items.push(format!("{extra};"));
    }

    let mut blocks = vec![
        Block::heading(1, DEFINITION_HEADING),
        Block::paragraph(DEFINITION_LEAD),
    ];
    if !items.is_empty() {
        blocks.push(Block::list(None, ListStyle::Numbered, items));
    }
    blocks.push(Block::list(Some(EXCEPTIONS_LEAD), ListStyle::Lettered, EXCEPTIONS));
    blocks
}

fn obligations(record: &ContractRecord) -> Vec<Block> {
    vec![
        Block::heading(1, OBLIGATIONS_HEADING),
        Block::paragraph(OBLIGATION_ACKNOWLEDGEMENT),
        Block::paragraph(OBLIGATION_NON_DISCLOSURE),
        Block::paragraph(format!("2.3 {}.", survival_clause(record))),
    ]
}

fn compliance() -> Vec<Block> {
    vec![
        Block::heading(1, COMPLIANCE_HEADING),
        Block::paragraph(COMPLIANCE_POPIA),
    ]
}

fn witness() -> Block {
    Block::LineGroup {
        lines: vec![
            "WITNESS:".to_string(),
            SIGNATURE_LINE.to_string(),
            "Full Name:".to_string(),
            "Date:".to_string(),
        ],
    }
}

fn signatures(record: &ContractRecord) -> Vec<Block> {
    let company = record.company();
    let party = record.counterparty();

    let mut recipient = vec![
        "THE RECIPIENT:".to_string(),
        SIGNATURE_LINE.to_string(),
        party.name().to_string(),
    ];
    if let Some(id) = party.id_number() {
        recipient.push(format!("ID Number: {id}"));
    }

    vec![
        Block::paragraph(EXECUTION),
        Block::paragraph(SIGNED_AT),
        Block::LineGroup {
            lines: vec![
                "THE COMPANY:".to_string(),
                SIGNATURE_LINE.to_string(),
                company.representative_name.clone(),
                company.representative_position.clone(),
                company.name.clone(),
            ],
        },
        witness(),
        Block::LineGroup { lines: recipient },
        witness(),
        Block::PageBreak,
        Block::Paragraph {
            runs: vec![Run::bold(DISCLAIMER_LABEL), Run::plain(DISCLAIMER)],
        },
    ]
}
