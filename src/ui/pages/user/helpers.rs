use crate::users::UserType;

/// Human-readable account type
pub fn map_user_type_to_display_type(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Buyer => "Buyer",
        UserType::Vendor => "Vendor",
        UserType::ProgramStaff => "Program Staff",
    }
}

/// Theme color of the status badge
pub fn badge_color(active: bool) -> &'static str {
    if active {
        "success"
    } else {
        "secondary"
    }
}
