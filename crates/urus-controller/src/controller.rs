//! The resource controller state machine.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use urus_core::error::{AuthError, Error, InvalidInputError, UsageError};
use urus_core::{
    ApiUrl, BearerToken, CollectionGateway, CredentialProvider, CursorNormalizer, Page,
    PageRequest, Record, RecordRef, RefToken, ResourceSchema, Result, UpdatePayload,
};

use crate::draft::{DraftValue, EditDraft};
use crate::state::{Direction, LoadError, LoadState, Snapshot};

/// Proof that a page load was issued; carries the sequence number used to
/// discard superseded completions.
#[derive(Debug)]
pub struct LoadTicket {
    seq: u64,
    request: PageRequest,
    credential: BearerToken,
}

impl LoadTicket {
    /// The page request this ticket was issued for.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// The credential read when the load was issued.
    pub fn credential(&self) -> &BearerToken {
        &self.credential
    }
}

/// Proof that a submit was issued; at most one exists at a time.
#[derive(Debug)]
pub struct SubmitTicket {
    token: RefToken,
    payload: UpdatePayload,
    credential: BearerToken,
}

impl SubmitTicket {
    /// The encoded identity of the record under edit.
    pub fn token(&self) -> &RefToken {
        &self.token
    }

    /// The full draft as an update payload.
    pub fn payload(&self) -> &UpdatePayload {
        &self.payload
    }

    /// The credential read when the submit was issued.
    pub fn credential(&self) -> &BearerToken {
        &self.credential
    }
}

/// Proof that a delete was issued for one reference.
#[derive(Debug)]
pub struct DeleteTicket {
    id: RecordRef,
    token: RefToken,
    credential: BearerToken,
}

impl DeleteTicket {
    /// The encoded reference being deleted.
    pub fn token(&self) -> &RefToken {
        &self.token
    }

    /// The credential read when the delete was issued.
    pub fn credential(&self) -> &BearerToken {
        &self.credential
    }
}

/// Drives fetch, select, edit, submit and delete against one paged
/// collection.
///
/// The controller owns all state transitions and error classification; the
/// gateway owns the wire. Each operation is available in two forms: an
/// async convenience method that performs the full round trip, and an
/// explicit `begin_*`/`complete_*` pair for event-driven presentation
/// layers that interleave operations. Both forms share the same guards, so
/// the contract holds either way.
///
/// Completions are applied in completion order. Page loads carry a
/// monotonic sequence number; a completion whose ticket is not the latest
/// issued is discarded rather than applied, so a slow stale response can
/// never overwrite a newer page.
pub struct ResourceController<G> {
    schema: ResourceSchema,
    gateway: G,
    credentials: Arc<dyn CredentialProvider>,
    normalizer: CursorNormalizer,
    load: LoadState,
    request: Option<PageRequest>,
    draft: Option<EditDraft>,
    pending: HashSet<RecordRef>,
    submit_in_flight: bool,
    load_seq: u64,
}

impl<G: CollectionGateway> ResourceController<G> {
    /// Create a controller for one resource screen.
    pub fn new(
        schema: ResourceSchema,
        gateway: G,
        credentials: Arc<dyn CredentialProvider>,
        base: &ApiUrl,
    ) -> Self {
        let normalizer = CursorNormalizer::for_resource(base, &schema);
        Self {
            schema,
            gateway,
            credentials,
            normalizer,
            load: LoadState::Idle,
            request: None,
            draft: None,
            pending: HashSet::new(),
            submit_in_flight: false,
            load_seq: 0,
        }
    }

    /// The schema this controller was built for.
    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// The gateway this controller drives.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The load axis of the state machine.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The currently displayed page, if loaded.
    pub fn page(&self) -> Option<&Page> {
        self.load.page()
    }

    /// The active edit draft, if a record is selected.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// References with a delete currently in flight.
    pub fn pending(&self) -> &HashSet<RecordRef> {
        &self.pending
    }

    /// Read-only snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            load: &self.load,
            draft: self.draft.as_ref(),
            pending: &self.pending,
        }
    }

    // ------------------------------------------------------------------
    // Page loads
    // ------------------------------------------------------------------

    /// Issue a page load: reads the credential, bumps the load sequence and
    /// enters `Loading`.
    ///
    /// # Errors
    ///
    /// Fails with [`AuthError::MissingToken`] when no credential is
    /// available; the load state records the unauthenticated failure and no
    /// network call must be made.
    pub fn begin_load(&mut self, request: PageRequest) -> Result<LoadTicket> {
        let credential = match self.credentials.bearer() {
            Some(credential) => credential,
            None => {
                self.load = LoadState::Failed(LoadError::Unauthenticated);
                return Err(AuthError::MissingToken.into());
            }
        };

        self.load_seq += 1;
        self.load = LoadState::Loading;
        self.request = Some(request.clone());
        debug!(seq = self.load_seq, ?request, "page load issued");

        Ok(LoadTicket {
            seq: self.load_seq,
            request,
            credential,
        })
    }

    /// Apply a load completion.
    ///
    /// Superseded completions (ticket older than the latest issued) are
    /// discarded; the return value reports whether the completion was
    /// applied. On success the new page replaces the previous one wholesale
    /// with its cursors normalized; on failure the load state carries the
    /// classified reason.
    pub fn complete_load(&mut self, ticket: LoadTicket, outcome: Result<Page>) -> bool {
        if ticket.seq != self.load_seq {
            debug!(
                seq = ticket.seq,
                latest = self.load_seq,
                "discarding superseded page response"
            );
            return false;
        }

        match outcome {
            Ok(mut page) => {
                page.next = page.next.map(|url| self.normalizer.normalize(&url));
                page.previous = page.previous.map(|url| self.normalizer.normalize(&url));
                debug!(items = page.items.len(), "page loaded");
                self.load = LoadState::Loaded(page);
            }
            Err(err) => {
                let reason = LoadError::classify(&err);
                debug!(%reason, "page load failed");
                self.load = LoadState::Failed(reason);
            }
        }
        true
    }

    /// Fetch a page and apply the outcome.
    ///
    /// Load failures land in the load state for the presentation layer;
    /// only the unauthenticated fast-path returns an error here.
    #[instrument(skip(self), fields(resource = %self.schema.name()))]
    pub async fn load_page(&mut self, request: PageRequest) -> Result<()> {
        let ticket = self.begin_load(request)?;
        let outcome = self
            .gateway
            .list(
                self.schema.path(),
                ticket.request(),
                self.schema.page_limit(),
                ticket.credential(),
            )
            .await;
        self.complete_load(ticket, outcome);
        Ok(())
    }

    /// Follow the next or previous cursor of the loaded page.
    ///
    /// A missing cursor is a no-op, not an error; the cursor is normalized
    /// before the fetch.
    #[instrument(skip(self), fields(resource = %self.schema.name()))]
    pub async fn advance_page(&mut self, direction: Direction) -> Result<()> {
        let cursor = match (&self.load, direction) {
            (LoadState::Loaded(page), Direction::Next) => page.next.clone(),
            (LoadState::Loaded(page), Direction::Previous) => page.previous.clone(),
            _ => None,
        };

        match cursor {
            Some(url) => {
                let url = self.normalizer.normalize(&url);
                self.load_page(PageRequest::ByCursor(url)).await
            }
            None => {
                debug!(?direction, "no cursor in this direction");
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection and draft edits
    // ------------------------------------------------------------------

    /// Select a record for viewing/editing, seeding a fresh draft from its
    /// current field values. Replaces any prior draft unconditionally.
    pub fn select_for_view(&mut self, record: &Record) -> Result<()> {
        if !matches!(self.load, LoadState::Loaded(_)) {
            return Err(UsageError::NoLoadedPage.into());
        }
        self.draft = Some(EditDraft::from_record(&self.schema, record));
        Ok(())
    }

    /// Discard the draft. Always succeeds; the load state is untouched.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Replace one pending field value in the draft.
    ///
    /// # Errors
    ///
    /// Fails with [`UsageError::NoActiveDraft`] while not editing, and
    /// rejects field names the schema does not declare.
    pub fn update_draft_field(&mut self, name: &str, value: DraftValue) -> Result<()> {
        let draft = self.draft.as_mut().ok_or(UsageError::NoActiveDraft)?;
        if !self.schema.has_field(name) {
            return Err(InvalidInputError::UnknownField {
                name: name.to_string(),
                resource: self.schema.name().to_string(),
            }
            .into());
        }
        draft.set(name, value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Issue a submit for the active draft: encodes its identity and takes
    /// the full draft as the request payload.
    ///
    /// # Errors
    ///
    /// Fails with [`UsageError::NoActiveDraft`] while not editing, with
    /// [`UsageError::OperationInFlight`] while a submit is already pending
    /// (never queued, never silently dropped), and with
    /// [`AuthError::MissingToken`] when no credential is available.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        let draft = self.draft.as_ref().ok_or(UsageError::NoActiveDraft)?;
        if self.submit_in_flight {
            return Err(UsageError::OperationInFlight.into());
        }
        let credential = self.credentials.bearer().ok_or(AuthError::MissingToken)?;
        let token = draft.id().encode()?;
        let payload = draft.to_payload();

        self.submit_in_flight = true;
        Ok(SubmitTicket {
            token,
            payload,
            credential,
        })
    }

    /// Apply a submit completion.
    ///
    /// On success the draft is dropped and the page request to re-fetch is
    /// returned: read-after-write consistency comes from re-fetching, never
    /// from patching the page locally. On failure the draft stays intact so
    /// no user input is lost.
    pub fn complete_submit(
        &mut self,
        _ticket: SubmitTicket,
        outcome: Result<()>,
    ) -> Result<PageRequest> {
        self.submit_in_flight = false;
        outcome?;
        self.draft = None;
        Ok(self.current_request())
    }

    /// Submit the active draft and re-fetch the displayed page.
    #[instrument(skip(self), fields(resource = %self.schema.name()))]
    pub async fn submit_edit(&mut self) -> Result<()> {
        let ticket = self.begin_submit()?;
        debug!("submitting draft");
        let outcome = self
            .gateway
            .update(
                self.schema.path(),
                ticket.token(),
                ticket.payload(),
                ticket.credential(),
            )
            .await;
        let request = self.complete_submit(ticket, outcome)?;
        self.load_page(request).await
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Issue a delete for one reference.
    ///
    /// `confirmed` is the collaborator-provided confirmation gate; an
    /// unconfirmed delete is rejected before anything is encoded or sent.
    ///
    /// # Errors
    ///
    /// Fails with [`UsageError::NotConfirmed`] without confirmation, with
    /// [`UsageError::AlreadyInFlight`] when this reference already has a
    /// delete pending, and with [`AuthError::MissingToken`] when no
    /// credential is available.
    pub fn begin_delete(&mut self, id: &RecordRef, confirmed: bool) -> Result<DeleteTicket> {
        if !confirmed {
            return Err(UsageError::NotConfirmed.into());
        }
        if self.pending.contains(id) {
            return Err(UsageError::AlreadyInFlight.into());
        }
        let credential = self.credentials.bearer().ok_or(AuthError::MissingToken)?;
        let token = id.encode()?;

        self.pending.insert(id.clone());
        Ok(DeleteTicket {
            id: id.clone(),
            token,
            credential,
        })
    }

    /// Apply a delete completion.
    ///
    /// The reference leaves the pending set either way. On success the page
    /// request to re-fetch is returned, stepping back one page when the
    /// deleted record was the only item on the final page; on failure the
    /// page state is untouched and the error is surfaced.
    pub fn complete_delete(
        &mut self,
        ticket: DeleteTicket,
        outcome: Result<()>,
    ) -> Result<PageRequest> {
        self.pending.remove(&ticket.id);
        outcome?;
        Ok(self.request_after_delete())
    }

    /// Delete one record (with confirmation) and re-fetch.
    #[instrument(skip(self), fields(resource = %self.schema.name()))]
    pub async fn delete_record(&mut self, id: &RecordRef, confirmed: bool) -> Result<()> {
        let ticket = self.begin_delete(id, confirmed)?;
        debug!("deleting record");
        let outcome = self
            .gateway
            .delete(self.schema.path(), ticket.token(), ticket.credential())
            .await;
        let request = self.complete_delete(ticket, outcome)?;
        self.load_page(request).await
    }

    // ------------------------------------------------------------------
    // Re-fetch targets
    // ------------------------------------------------------------------

    fn current_request(&self) -> PageRequest {
        self.request.clone().unwrap_or(PageRequest::ByOffset(1))
    }

    /// Where to land after a successful delete.
    ///
    /// Deleting the only record on the final page must request the previous
    /// page rather than display an empty one; the generic re-fetch does not
    /// handle that by itself.
    fn request_after_delete(&self) -> PageRequest {
        if let LoadState::Loaded(page) = &self.load {
            if page.items.len() == 1 && page.next.is_none() {
                if let Some(previous) = &page.previous {
                    return PageRequest::ByCursor(self.normalizer.normalize(previous));
                }
                if let Some(n) = self.current_request().page_number() {
                    if n > 1 {
                        return PageRequest::ByOffset(n - 1);
                    }
                }
            }
        }
        self.current_request()
    }
}
