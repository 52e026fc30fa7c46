//! Converter functions from the access-request DTOs to the domain model.

use binder_core::{BindResult, Binder};

use super::{
    dto::{AccessRequestDto, RoleDto, UserDto, UserNameDto},
    model::{AccessRequest, EmailAddress, Role, RoleId, Tag, User, UserName, parse_user_id},
};

pub fn convert_access_request(bind: &mut Binder<'_, AccessRequestDto>) -> BindResult<AccessRequest> {
    let requester = bind
        .complex_property("User", |r| r.user.as_ref())
        .as_required(convert_user);
    let roles = bind
        .list_of_complex_properties("Roles", |r| r.roles.as_deref())
        .as_required(convert_role);
    let tags = bind
        .list_of_simple_properties("Tags", |r| r.tags.as_deref())
        .as_optional_with(|tag| Tag::parse(tag));
    let justification = bind
        .simple_property("Justification", |r| r.justification.clone())
        .as_optional();
    bind.assert_has_no_error()?;

    Ok(AccessRequest {
        requester: requester.into_value()?,
        roles: roles.into_value()?,
        tags: tags.into_value_or_default()?,
        justification: justification.into_value()?,
    })
}

pub fn convert_user(bind: &mut Binder<'_, UserDto>) -> BindResult<User> {
    let id = bind
        .simple_property("Id", |u| u.id.clone())
        .as_required_with(parse_user_id);
    let user_name = bind
        .complex_property("UserName", |u| u.user_name.as_ref())
        .as_required(convert_user_name);
    let email = bind
        .simple_property("Email", |u| u.email.clone())
        .as_optional_with(EmailAddress::parse);
    bind.assert_has_no_error()?;

    Ok(User {
        id: id.into_value()?,
        user_name: user_name.into_value()?,
        email: email.into_value()?,
    })
}

pub fn convert_user_name(bind: &mut Binder<'_, UserNameDto>) -> BindResult<UserName> {
    let first_name = bind
        .simple_property("FirstName", |n| n.first_name.clone())
        .as_required();
    let last_name = bind
        .simple_property("LastName", |n| n.last_name.clone())
        .as_required();
    bind.assert_has_no_error()?;

    Ok(UserName {
        first_name: first_name.into_value()?,
        last_name: last_name.into_value()?,
    })
}

pub fn convert_role(bind: &mut Binder<'_, RoleDto>) -> BindResult<Role> {
    let id = bind
        .simple_property("Id", |r| r.id.clone())
        .as_required_with(RoleId::parse);
    let name = bind.simple_property("Name", |r| r.name.clone()).as_required();
    bind.assert_has_no_error()?;

    Ok(Role {
        id: id.into_value()?,
        name: name.into_value()?,
    })
}
