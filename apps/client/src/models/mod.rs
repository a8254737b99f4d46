pub mod job;
pub mod talent;
pub mod user;

pub use job::{
    ApplicationInfo, CustomAttributes, DerivedInfo, Job, JobLocation, LatLng, PostalAddress,
};
pub use talent::{Talent, TalentRoster};
pub use user::User;
