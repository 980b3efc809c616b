//! Setup instructions handed to whoever imports the generated workflow.

use crate::error::ExportError;
use crate::export::write_text_file;
use std::path::{Path, PathBuf};

pub const DEFAULT_GUIDE_FILENAME: &str = "calendar-sync-setup-guide.txt";

const SETUP_GUIDE: &str = "\
# Google Calendar to Zoho Calendar Sync - Setup Instructions

## What is this?
An n8n workflow that mirrors Google Calendar changes into Zoho Calendar.
Events created, updated or deleted in Google Calendar are created, updated or
deleted in Zoho Calendar. All-day and timed events are both handled, and the
workflow reacts in real time through a webhook.

## Prerequisites
- n8n account (free at n8n.io)
- Google Calendar account with API access
- Zoho Calendar account with API access

## Step 1: Setup n8n
1. Go to https://n8n.io and create a free account
2. Create a new workflow
3. Import the provided workflow JSON file

## Step 2: Setup Google Calendar API
1. Go to Google Cloud Console (console.cloud.google.com)
2. Create a new project or select an existing one
3. Enable the Google Calendar API
4. Create OAuth 2.0 credentials
5. Add your n8n webhook URL to the authorized redirect URIs

## Step 3: Setup Zoho Calendar API
1. Go to Zoho API Console (api-console.zoho.com)
2. Create a new application
3. Generate OAuth credentials
4. Note down the Client ID and Client Secret

## Step 4: Configure Workflow
1. Add the Google Calendar OAuth credentials in n8n (credential: Google Calendar OAuth2)
2. Add the Zoho Calendar OAuth credentials in n8n (credential: Zoho Calendar OAuth2)
3. Configure the webhook URL in Google Calendar
4. Test the workflow
5. Activate the workflow

## Step 5: Testing
1. Create a test event in Google Calendar; it should appear in Zoho Calendar within minutes
2. Update the event and verify the change reaches Zoho Calendar
3. Delete the event and confirm it is removed from Zoho Calendar

## Required credentials
Google Calendar OAuth: Client ID, Client Secret, Redirect URI (from n8n)
Zoho Calendar OAuth: Client ID, Client Secret, Redirect URI (from n8n)
Keep client secrets out of the workflow file; enter them only in n8n's credential store.

## Support
If you need help, contact your workflow provider or check the n8n documentation at docs.n8n.io
";

pub fn setup_guide() -> &'static str {
    SETUP_GUIDE
}

/// Writes the guide to `path`, or to [`DEFAULT_GUIDE_FILENAME`] in the working directory.
pub fn write_setup_guide(path: Option<&Path>) -> Result<PathBuf, ExportError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_GUIDE_FILENAME));
    write_text_file(path, SETUP_GUIDE)?;
    Ok(path.to_path_buf())
}
