//! Wire shape of an access request. Every field may be absent.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessRequestDto {
    pub user: Option<UserDto>,
    pub roles: Option<Vec<RoleDto>>,
    pub tags: Option<Vec<String>>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    pub id: Option<String>,
    pub user_name: Option<UserNameDto>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserNameDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleDto {
    pub id: Option<String>,
    pub name: Option<String>,
}
