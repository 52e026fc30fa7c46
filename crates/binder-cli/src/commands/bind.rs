//! `binder bind`: load a request document and bind it into the domain model.

use tracing::{info, instrument};

use binder_adapters::{
    ProblemDetails, RequestFormat,
    access_request::{AccessRequest, AccessRequestDto, bind_access_request},
    load_request,
};
use binder_core::{BindingError, ValidationErrors};

use crate::{
    cli::{BindArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: BindArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.file.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is a directory, not a request document", args.file.display()),
            source: None,
        });
    }

    let format = args
        .format
        .map(RequestFormat::from)
        .or_else(|| RequestFormat::from_path(&args.file))
        .unwrap_or(config.input.default_format);

    let dto: AccessRequestDto = load_request(&args.file, Some(format))?;

    match bind_access_request(&dto) {
        Ok(request) => {
            info!(roles = request.roles.len(), "request accepted");
            render_request(&request, &output)
        }
        Err(BindingError::Invalid(errors)) => {
            info!(errors = errors.len(), "request rejected");
            if args.problem || output.format() == OutputFormat::Json {
                let problem = problem_details(&errors, &config, args.instance);
                output.json(&problem)?;
            }
            Err(CliError::Validation(errors))
        }
        Err(fault) => Err(fault.into()),
    }
}

fn problem_details(
    errors: &ValidationErrors,
    config: &AppConfig,
    instance: Option<String>,
) -> ProblemDetails {
    let problem = ProblemDetails::from_validation_errors(errors)
        .with_type(config.problem.type_uri.as_str())
        .with_title(config.problem.title.as_str());
    match instance {
        Some(instance) => problem.with_instance(instance),
        None => problem,
    }
}

fn render_request(request: &AccessRequest, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(request);
    }

    output.success("Request is valid")?;
    output.header("Requester")?;
    output.field("id", &request.requester.id.to_string())?;
    output.field("name", &request.requester.user_name.to_string())?;
    if let Some(email) = &request.requester.email {
        output.field("email", email.as_str())?;
    }

    output.header(&format!("Roles ({})", request.roles.len()))?;
    for role in &request.roles {
        output.field(role.id.as_str(), &role.name)?;
    }

    if !request.tags.is_empty() {
        let tags = request
            .tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        output.field("tags", &tags)?;
    }
    if let Some(justification) = &request.justification {
        output.field("justification", justification)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binder_core::ValidationError;

    #[test]
    fn problem_uses_configured_type_and_title() {
        let mut config = AppConfig::default();
        config.problem.type_uri = "https://example.com/probs/invalid".into();
        config.problem.title = "Invalid request".into();
        let errors = ValidationErrors::from(vec![ValidationError::required("User")]);

        let problem = problem_details(&errors, &config, Some("/requests/7".into()));

        assert_eq!(problem.type_uri, "https://example.com/probs/invalid");
        assert_eq!(problem.title, "Invalid request");
        assert_eq!(problem.instance.as_deref(), Some("/requests/7"));
        assert_eq!(problem.invalid_params[0].name, "User");
    }

    #[test]
    fn problem_without_instance() {
        let errors = ValidationErrors::from(vec![ValidationError::required("Roles")]);
        let problem = problem_details(&errors, &AppConfig::default(), None);
        assert!(problem.instance.is_none());
        assert_eq!(problem.type_uri, "about:blank");
    }
}
