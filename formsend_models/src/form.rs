/// Discriminator for the three inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

/// Raw field values as read from the page, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}
