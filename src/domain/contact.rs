/// The person paying an itemized payment.
///
/// Stored with the payment and shown in the merchant's panel. The phone,
/// mobile and company fields are optional and default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub postal_code: String,
    pub postal_office: String,
    pub country: String,
    pub telephone: String,
    pub mobile: String,
    pub company: String,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        postal_office: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            street: street.into(),
            postal_code: postal_code.into(),
            postal_office: postal_office.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }
}
