use shared::UserDto;

use crate::domain::models::User;

pub struct UserMapper;

impl UserMapper {
    /// Convert a domain user to its public DTO. The password hash never
    /// leaves the backend.
    pub fn to_dto(user: User) -> UserDto {
        UserDto {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
