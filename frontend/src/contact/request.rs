use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Live values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required inputs that are still empty, in form order.
    ///
    /// Matches the inputs' `required` attribute: whitespace counts as a value.
    pub fn missing_required(&self) -> Vec<Field> {
        [Field::Name, Field::Phone]
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn snapshot(&self) -> ContactRequest {
        ContactRequest {
            access_key: config::WEB3FORMS_ACCESS_KEY.to_string(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// What actually goes over the wire, frozen at submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub access_key: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn form_entries(&self) -> [(&'static str, &str); 5] {
        [
            ("access_key", self.access_key.as_str()),
            (Field::Name.key(), self.name.as_str()),
            (Field::Phone.key(), self.phone.as_str()),
            (Field::Email.key(), self.email.as_str()),
            (Field::Message.key(), self.message.as_str()),
        ]
    }
}
