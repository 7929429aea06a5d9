//! The demo request payload, its per-field rules and the option catalogs.

use amia_derive::api_model;
use amia_kernel::validation::{FieldErrors, ValidationError};
use serde::Serialize;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const COMPANY_SIZE_REQUIRED: &str = "Please select your company size";
pub const COUNTRY_REQUIRED: &str = "Please select your country";
pub const INDUSTRY_REQUIRED: &str = "Please select your industry";

#[api_model]
#[derive(Clone, Default, PartialEq, Eq)]
/// A prospect asking for a product demo.
pub struct DemoRequest {
    /// Full name
    pub name: String,
    /// Contact address, used as the reply-to of the notification
    pub email: String,
    /// One of the company size options (`1-10`, `11-50`, ...)
    pub company_size: String,
    /// Country code from the country options
    pub country: String,
    /// Industry from the industry options
    pub industry: String,
}

/// The five collected fields, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DemoField {
    Name,
    Email,
    CompanySize,
    Country,
    Industry,
}

impl DemoField {
    pub const ALL: [Self; 5] =
        [Self::Name, Self::Email, Self::CompanySize, Self::Country, Self::Industry];

    /// Key used on the wire and in [`FieldErrors`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CompanySize => "companySize",
            Self::Country => "country",
            Self::Industry => "industry",
        }
    }

    /// Wizard step showing this field.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Name),
            1 => Some(Self::Email),
            2 => Some(Self::CompanySize),
            3 => Some(Self::Country),
            4 => Some(Self::Industry),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Options offered for a select-style field. Free-text fields have none.
    #[must_use]
    pub const fn options(self) -> &'static [SelectOption] {
        match self {
            Self::Name | Self::Email => &[],
            Self::CompanySize => COMPANY_SIZES,
            Self::Country => COUNTRIES,
            Self::Industry => INDUSTRIES,
        }
    }
}

impl DemoRequest {
    #[must_use]
    pub fn get(&self, field: DemoField) -> &str {
        match field {
            DemoField::Name => &self.name,
            DemoField::Email => &self.email,
            DemoField::CompanySize => &self.company_size,
            DemoField::Country => &self.country,
            DemoField::Industry => &self.industry,
        }
    }

    pub fn set(&mut self, field: DemoField, value: impl Into<String>) {
        let slot = match field {
            DemoField::Name => &mut self.name,
            DemoField::Email => &mut self.email,
            DemoField::CompanySize => &mut self.company_size,
            DemoField::Country => &mut self.country,
            DemoField::Industry => &mut self.industry,
        };
        *slot = value.into();
    }

    /// Applies the rule of a single field. Returns `true` if it passed.
    pub fn check_field(&self, field: DemoField, errors: &mut FieldErrors) -> bool {
        let value = self.get(field);
        match field {
            DemoField::Name => errors.check_required(field.key(), value, NAME_REQUIRED),
            DemoField::Email => {
                errors.check_email(field.key(), value, EMAIL_REQUIRED, EMAIL_INVALID)
            },
            DemoField::CompanySize => {
                errors.check_required(field.key(), value, COMPANY_SIZE_REQUIRED)
            },
            DemoField::Country => errors.check_required(field.key(), value, COUNTRY_REQUIRED),
            DemoField::Industry => errors.check_required(field.key(), value, INDUSTRY_REQUIRED),
        }
    }

    /// Checks every field at once.
    ///
    /// # Errors
    /// Returns [`ValidationError::Invalid`] with one message per failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        for field in DemoField::ALL {
            self.check_field(field, &mut errors);
        }
        errors.into_result()
    }
}

/// A selectable value with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const COMPANY_SIZES: &[SelectOption] = &[
    option("1-10", "1-10 employees"),
    option("11-50", "11-50 employees"),
    option("51-200", "51-200 employees"),
    option("201-500", "201-500 employees"),
    option("501+", "501+ employees"),
];

pub const COUNTRIES: &[SelectOption] = &[
    option("us", "United States"),
    option("mx", "Mexico"),
    option("ec", "Ecuador"),
    option("co", "Colombia"),
    option("es", "Spain"),
    option("ar", "Argentina"),
    option("cl", "Chile"),
    option("pe", "Peru"),
    option("other", "Other"),
];

pub const INDUSTRIES: &[SelectOption] = &[
    option("technology", "Technology"),
    option("finance", "Finance"),
    option("healthcare", "Healthcare"),
    option("education", "Education"),
    option("retail", "Retail"),
    option("manufacturing", "Manufacturing"),
    option("services", "Services"),
    option("other", "Other"),
];

/// Option lists of the three select steps.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DemoOptions {
    pub company_sizes: Vec<SelectOption>,
    pub countries: Vec<SelectOption>,
    pub industries: Vec<SelectOption>,
}

impl DemoOptions {
    #[must_use]
    pub fn catalog() -> Self {
        Self {
            company_sizes: COMPANY_SIZES.to_vec(),
            countries: COUNTRIES.to_vec(),
            industries: INDUSTRIES.to_vec(),
        }
    }
}
