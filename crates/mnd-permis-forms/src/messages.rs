//! User-facing texts.
//!
//! The site ships in a single locale, so every string lives here as a constant.

pub const INVALID_PHONE: &str = "Veuillez entrer un numéro de téléphone marocain valide";

pub const INVALID_EMAIL: &str = "Veuillez entrer une adresse email valide";

pub const CONSENT_REQUIRED: &str = "Vous devez accepter la politique de confidentialité";

pub const SUBMISSION_SUCCEEDED: &str =
	"Votre candidature a été envoyée avec succès ! Nous vous contacterons bientôt.";

pub const SUBMISSION_FAILED: &str =
	"Une erreur est survenue lors de l'envoi. Veuillez réessayer plus tard.";

/// Label shown inside the submit button while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Envoi en cours...";
