//! Constants used throughout the application
//!
//! This module centralizes UI text, wizard fixtures and other constant values
//! to improve maintainability and consistency.

// Page Titles
pub const TITLE_LANDING: &str = "Digital Marketplace";
pub const TITLE_USER_LIST: &str = "List Users";
pub const TITLE_DESCRIBE_PROJECT: &str = "Describe Your Project";

// Page Headings
pub const HEADING_USER_LIST: &str = "Digital Marketplace Users";
pub const HEADING_STARTING_PHASE: &str = "Starting Phase";
pub const HEADING_COMMON_DELIVERABLES: &str = "Common Deliverables";
pub const HEADING_DETAILS: &str = "Details";
pub const HEADING_TEAM_CAPABILITIES: &str = "Team Capabilities";

pub const LANDING_TAGLINE: &str = "Helping public sector buyers and vendors deliver digital services together.";
pub const STARTING_PHASE_PLACEHOLDER: &str = "Starting phase selection is not available yet.";
pub const TEAM_CAPABILITIES_HELP: &str = "Select the capabilities that you will need during this phase and \
     indicate whether you expect the need to be for part-time or full-time.";

// Field Labels
pub const LABEL_PHASE_START_DATE: &str = "Phase start date";
pub const LABEL_PHASE_COMPLETION_DATE: &str = "Phase completion date";
pub const LABEL_PHASE_MAX_BUDGET: &str = "Phase max budget";
pub const PLACEHOLDER_BUDGET: &str = "0.00";
pub const PLACEHOLDER_DATE: &str = "YYYY-MM-DD";

// User list table
pub const USER_LIST_TABLE_ID: &str = "user-list-table";
pub const HEAD_STATUS: &str = "Status";
pub const HEAD_ACCOUNT_TYPE: &str = "Account Type";
pub const HEAD_NAME: &str = "Name";
pub const HEAD_ADMIN: &str = "Admin?";
pub const BADGE_ACTIVE: &str = "Active";
pub const BADGE_INACTIVE: &str = "Inactive";

// Capability time commitment badges
pub const BADGE_PART_TIME: &str = "P/T";
pub const BADGE_FULL_TIME: &str = "F/T";

// Validation Messages
pub const ERROR_START_DATE_REQUIRED: &str = "Please enter a phase start date.";
pub const ERROR_MAX_BUDGET_REQUIRED: &str = "Please enter a phase max budget.";
pub const ERROR_MAX_BUDGET_POSITIVE: &str = "The phase max budget must be greater than zero.";
pub const ERROR_COMPLETION_BEFORE_START: &str = "The completion date cannot be before the start date.";

// Toast Messages
pub const TOAST_PHASE_VALID: &str = "✅ Phase details look good";
pub const TOAST_PHASE_INVALID: &str = "❌ Please fix the highlighted phase details";
pub const TOAST_USER_SOURCE_FAILED: &str = "❌ Failed to load the user directory, showing sample users";

// Modal text
pub const MODAL_QUIT_TITLE: &str = "Quit";
pub const MODAL_QUIT_BODY: &str = "Leave the Digital Marketplace?";
pub const MODAL_LOGS_TITLE: &str = "🔍 Logs - Press 'Esc' to close";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Phase fixtures
pub const PHASE_INCEPTION_TITLE: &str = "Inception";
pub const PHASE_INCEPTION_DESCRIPTION: &str = "During Inception you will take your business goals and research \
     findings and explore the potential value that a new digital product can bring. You will then determine the \
     features of a Minimum Viable Product (MVP) and the scope for an Alpha release.";
pub const PHASE_INCEPTION_DELIVERABLES: &[&str] = &[
    "Happy stakeholders with a shared vision for your digital product",
    "A product backlog for the Alpha release",
];

pub const PHASE_PROOF_OF_CONCEPT_TITLE: &str = "Proof of Concept";
pub const PHASE_PROOF_OF_CONCEPT_DESCRIPTION: &str = "During Proof of Concept you will make your value \
     propositions tangible so that they can be validated. You will begin developing the core features of your \
     product that were scoped out during the Inception phase, working towards the Alpha release!";
pub const PHASE_PROOF_OF_CONCEPT_DELIVERABLES: &[&str] = &[
    "Alpha release of the product",
    "a build/buy/licence decision",
    "Product Roadmap",
    "Resourcing plan for Implementation",
];

pub const PHASE_IMPLEMENTATION_TITLE: &str = "Implementation";
pub const PHASE_IMPLEMENTATION_DESCRIPTION: &str = "As you reach the Implementation phase you should be fully \
     invested in your new digital product and plan for its continuous improvement. Next, you will need to \
     carefully architect and automate the delivery pipeline for stability and continuous deployment.";
pub const PHASE_IMPLEMENTATION_DELIVERABLES: &[&str] = &["Delivery of the function components in the Product Roadmap"];

/// Capabilities offered in every phase, in display order
pub const CAPABILITIES: &[&str] = &[
    "Agile Coaching",
    "Delivery Management",
    "Frontend Development",
    "Technical Architecture",
    "User Research",
    "Backend Development",
    "DevOps Engineering",
    "Security Engineering",
    "User Experience Design",
];

// Defaults
/// Date format used by date inputs unless configured otherwise
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Seconds a toast stays on screen
pub const DEFAULT_TOAST_TIMEOUT_SECS: u64 = 5;
/// Maximum toast timeout accepted by configuration
pub const MAX_TOAST_TIMEOUT_SECS: u64 = 60;
/// Toasts shown at once; older ones are dropped first
pub const MAX_TOASTS: usize = 4;
/// Lines retained by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 500;
/// Longest text accepted by a single form input
pub const MAX_INPUT_LENGTH: usize = 32;

// UI Layout Constants
/// Height of the navigation bar in rows
pub const NAV_HEIGHT: u16 = 3;
/// Width of a toast in columns
pub const TOAST_WIDTH: u16 = 48;
