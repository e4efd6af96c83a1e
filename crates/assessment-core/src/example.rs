//! # Reference Assessment
//!
//! The "Legislation waste management" assessment, built through the public
//! API. It exercises every child kind, both key spellings, and the named
//! dimension lookup, and is what `assessment example` prints.

use crate::assessment::Assessment;
use crate::dimension::Dimension;
use crate::entity::Entity;
use crate::error::ModelError;

/// The reference assessment: one binding requirement with every kind of
/// child, two result dimensions, and the free-text trailer fields.
pub fn reference_assessment() -> Result<Assessment, ModelError> {
    let mut assessment = Assessment::new();
    assessment.set("name", "Legislation waste management")?;

    assessment
        .set_provider_inline()
        .set("name", "City of Brussels")?
        .set("organisation_type", "local_public_sector_body")?
        .set("country", "BE")?;

    let br = assessment.add_binding_requirement();
    br.set("description", "Article 5")?;
    br.add_document("https://example.com/law/123")
        .add_document("https://example.com/regulation/eu-1655467-s");

    br.add_expression()
        .set("name", "Legal Act 2024")?
        .set("description", "Reference to an EU legal expression")?
        .set("documentedIn", "https://example.com/eli/act")?;

    br.add_affected_service()
        .set("name", "Digital Monitoring Unit")?
        .set("thematicArea", "digital_and_innovation_services")?;
    br.add_affected_service()
        .set("name", "Training Centre")?
        .set("thematicArea", "education_and_research")?;

    br.add_participant()
        .set("country", "BE")?
        .set("participantType", "national_public_sector_body")?;
    br.add_participant()
        .set("country", "IT")?
        .set("participant_type", "private_businesses")?;

    br.add_asset()
        .set("title", "Portal EU")?
        .set("description", "An EU portal interoperable solution")?
        .set("landing_page", "https://portal.example.eu")?;
    br.add_asset_reference("b21e876e-8ad0-4057-ad57-de45c51d374f")
        .add_asset_reference("a0e76022-863e-4f8f-8eb0-8227cd080be4");

    assessment
        .results_in_mut(Dimension::Organisational)
        .set("interpretation", "positive")?
        .set("judgement", "Compliant with conditions")?;
    assessment
        .results_in_named("technical")
        .ok_or_else(|| ModelError::UnknownDimension("technical".to_string()))?
        .set("interpretation", "neutral")?
        .set("judgement", "Requires follow-up")?;

    assessment.set(
        "remainingBarriers",
        "The city has not yet implemented the new regulations.",
    )?;
    assessment
        .add_document("https://files.example.com/documents/req-1.pdf")
        .add_document("https://files.example.com/documents/regulation.2025.pdf");
    assessment.set(
        "otherComment",
        "Still work to be done. Waiting for a new iteration.",
    )?;

    Ok(assessment)
}
