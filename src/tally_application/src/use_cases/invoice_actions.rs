use tally_core::{
    FieldErrors, FormState, InvoiceForm, InvoiceId, InvoiceStore, MutationOutcome,
    PathRevalidator, Redirect, ValidationResult,
};

use super::execute_mutation::{Mutation, MutationExecutor, MutationFault, delete_failed};

/// What a form submission resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// The mutation went through; the listing was invalidated and the
    /// request ends with a navigation to it.
    Navigate(Redirect),
    /// Re-render the form with this state.
    Render(FormState),
}

/// Invoice form actions: validate, run one mutation, then invalidate and
/// navigate to the listing on success.
#[derive(Clone)]
pub struct InvoiceActions<I, C>
where
    I: InvoiceStore,
    C: PathRevalidator,
{
    executor: MutationExecutor<I>,
    revalidator: C,
    listing_path: String,
}

impl<I, C> InvoiceActions<I, C>
where
    I: InvoiceStore,
    C: PathRevalidator,
{
    pub fn new(executor: MutationExecutor<I>, revalidator: C, listing_path: String) -> Self {
        Self {
            executor,
            revalidator,
            listing_path,
        }
    }

    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    /// Create an invoice from a form post. All field errors are reported
    /// together.
    #[tracing::instrument(name = "InvoiceActions::create_invoice", skip_all)]
    pub async fn create_invoice(&self, form: InvoiceForm) -> Result<ActionResult, MutationFault> {
        let outcome = match form.validate() {
            ValidationResult::Valid(draft) => self.executor.execute(Mutation::Create(draft)).await?,
            ValidationResult::Invalid(errors) => {
                rejected(errors, "Missing Fields. Failed to Create Invoice.")
            }
        };

        Ok(self.settle(outcome).await)
    }

    /// Update the invoice at `id` from a form post. Validation stops at the
    /// first bad field.
    #[tracing::instrument(name = "InvoiceActions::update_invoice", skip(self, form))]
    pub async fn update_invoice(
        &self,
        id: InvoiceId,
        form: InvoiceForm,
    ) -> Result<ActionResult, MutationFault> {
        let outcome = match form.validate_strict() {
            Ok(draft) => self.executor.execute(Mutation::Update(id, draft)).await?,
            Err(error) => rejected(error.into(), "Missing Fields. Failed to Update Invoice."),
        };

        Ok(self.settle(outcome).await)
    }

    /// Delete the invoice whose id is `id`, as received.
    ///
    /// Under the default [`DeletePolicy::Fault`](super::execute_mutation::DeletePolicy)
    /// this always returns [`MutationFault::DeleteDisabled`], whatever `id`
    /// holds, without touching the store or the cache. Once enabled, an id
    /// that is not a uuid matches nothing the store could hold and fails like
    /// a store error.
    #[tracing::instrument(name = "InvoiceActions::delete_invoice", skip(self))]
    pub async fn delete_invoice(&self, id: &str) -> Result<ActionResult, MutationFault> {
        self.executor.ensure_delete_enabled()?;

        let outcome = match id.parse::<InvoiceId>() {
            Ok(id) => self.executor.execute(Mutation::Delete(id)).await?,
            Err(e) => {
                tracing::warn!(error = %e, "Delete requested for a malformed invoice id");
                delete_failed()
            }
        };

        Ok(self.settle(outcome).await)
    }

    async fn settle(&self, outcome: MutationOutcome) -> ActionResult {
        match outcome.into_form_state() {
            Some(state) => ActionResult::Render(state),
            None => {
                self.revalidator.revalidate_path(&self.listing_path).await;
                ActionResult::Navigate(Redirect::to(self.listing_path.as_str()))
            }
        }
    }
}

fn rejected(errors: FieldErrors, message: &str) -> MutationOutcome {
    tracing::debug!(fields = errors.len(), "Form rejected");
    MutationOutcome::ValidationFailed {
        errors,
        message: message.to_owned(),
    }
}
