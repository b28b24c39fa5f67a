//! Record builders shared by the processing unit tests.

use crate::types::{
    Coordinates, DataSet, Dob, Location, Login, Name, Record, Registered, Timezone,
};

pub(crate) fn user(first: &str, last: &str) -> Record {
    Record {
        name: Name::new(first, last),
        gender: "female".to_string(),
        location: Location {
            country: "Spain".to_string(),
            city: "Madrid".to_string(),
            coordinates: Coordinates {
                latitude: "40.4168".to_string(),
                longitude: "-3.7038".to_string(),
            },
            timezone: Timezone {
                offset: "+1:00".to_string(),
            },
        },
        login: Login {
            username: format!("{}{}", first.to_lowercase(), last.to_lowercase()),
        },
        dob: Dob { age: 30 },
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        registered: Registered {
            date: "2010-05-01T10:00:00.000Z".to_string(),
            age: 15,
        },
        nat: "ES".to_string(),
    }
}

pub(crate) trait RecordExt {
    fn age(self, age: u32) -> Self;
    fn gender(self, gender: &str) -> Self;
    fn country(self, country: &str) -> Self;
    fn city(self, city: &str) -> Self;
    fn offset(self, offset: &str) -> Self;
    fn username(self, username: &str) -> Self;
    fn registered_on(self, date: &str) -> Self;
    fn nat(self, nat: &str) -> Self;
    fn coords(self, latitude: &str, longitude: &str) -> Self;
}

impl RecordExt for Record {
    fn age(mut self, age: u32) -> Self {
        self.dob.age = age;
        self
    }

    fn gender(mut self, gender: &str) -> Self {
        self.gender = gender.to_string();
        self
    }

    fn country(mut self, country: &str) -> Self {
        self.location.country = country.to_string();
        self
    }

    fn city(mut self, city: &str) -> Self {
        self.location.city = city.to_string();
        self
    }

    fn offset(mut self, offset: &str) -> Self {
        self.location.timezone.offset = offset.to_string();
        self
    }

    fn username(mut self, username: &str) -> Self {
        self.login.username = username.to_string();
        self
    }

    fn registered_on(mut self, date: &str) -> Self {
        self.registered.date = date.to_string();
        self
    }

    fn nat(mut self, nat: &str) -> Self {
        self.nat = nat.to_string();
        self
    }

    fn coords(mut self, latitude: &str, longitude: &str) -> Self {
        self.location.coordinates = Coordinates {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        };
        self
    }
}

pub(crate) fn dataset(records: Vec<Record>) -> DataSet {
    DataSet::new(records)
}
