//! Session configuration assembly.

use tracing::instrument;

use crate::config::LiveSettings;
use crate::declarations::function_declarations;
use crate::error::LiveError;
use crate::prompt::render_system_instruction;
use crate::protocol::{
    Content, GenerationConfig, GoogleSearch, SessionConfig, SpeechConfig, Tool,
};

impl SessionConfig {
    /// Build the configuration submitted when a classification session starts.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::Template` if the system instruction fails to render.
    #[instrument(skip(settings), fields(model = %settings.model, locale = %settings.locale))]
    pub fn assemble(settings: &LiveSettings) -> Result<Self, LiveError> {
        let system_instruction = Content::text(render_system_instruction(settings.locale)?);

        let mut tools = Vec::with_capacity(2);
        if settings.google_search {
            tools.push(Tool::GoogleSearch {
                google_search: GoogleSearch {},
            });
        }
        tools.push(Tool::FunctionDeclarations {
            function_declarations: function_declarations(settings.charts),
        });

        Ok(Self {
            model: settings.model.clone(),
            generation_config: GenerationConfig {
                response_modalities: settings.response_modality,
                speech_config: Some(SpeechConfig::prebuilt(settings.voice.clone())),
            },
            system_instruction,
            tools,
        })
    }

    /// Names of all declared functions, in declaration order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.tools
            .iter()
            .filter_map(|tool| match tool {
                Tool::FunctionDeclarations {
                    function_declarations,
                } => Some(function_declarations),
                Tool::GoogleSearch { .. } => None,
            })
            .flatten()
            .map(|declaration| declaration.name.as_str())
    }
}
