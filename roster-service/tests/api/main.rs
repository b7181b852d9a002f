mod create_user;
mod helpers;
mod profile_deleted;
