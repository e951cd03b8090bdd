pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{listing_builder::*, user_builder::*};

pub mod listing_builder {

    use super::*;
    use crate::{id::*, listing::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description = desc.into();
            self
        }
        pub fn price(mut self, price: u64) -> Self {
            self.listing.price = price;
            self
        }
        pub fn category(mut self, category_id: &str) -> Self {
            self.listing.category_id = category_id.into();
            self
        }
        pub fn seller(mut self, seller_id: &str) -> Self {
            self.listing.seller_id = seller_id.into();
            self
        }
        pub fn status(mut self, status: ReviewStatus) -> Self {
            self.listing.status = status;
            self
        }
        pub fn rejection_reason(mut self, reason: &str) -> Self {
            self.listing.rejection_reason = Some(reason.into());
            self
        }
        pub fn created_at(mut self, created_at: impl Into<Timestamp>) -> Self {
            self.listing.created_at = Some(created_at.into());
            self
        }
        pub fn without_created_at(mut self) -> Self {
            self.listing.created_at = None;
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.listing.image_url = image_url.map(Into::into);
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            ListingBuild {
                listing: Listing {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    price: 0,
                    category_id: Id::default(),
                    seller_id: Id::default(),
                    image_url: None,
                    image_hint: None,
                    salary_period: None,
                    created_at: Some(Timestamp::now()),
                    status: ReviewStatus::Pending,
                    rejection_reason: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn rating(mut self, average: f64, reviews: u32) -> Self {
            self.user.average_rating = average.into();
            self.user.reviews = reviews;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    avatar_url: None,
                    average_rating: Default::default(),
                    reviews: 0,
                    role: Role::User,
                    mobile: None,
                    dob: None,
                },
            }
        }
    }

    #[test]
    fn default_user_is_no_admin() {
        let user = User::build().name("Ravi").finish();
        assert_eq!(Role::User, user.role);
        assert_eq!("Ravi", user.name);
    }
}
