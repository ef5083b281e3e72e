use super::scope::Scope;
use super::script::Script;
use crate::core::errors::Result;

/// Path every top-level module hangs off, whatever the design is called
pub const DESIGN_ROOT: &str = "Process0";

/// Pending design; `create` writes its header
#[derive(Debug, Clone)]
pub struct DesignBuilder {
    script: Script,
    platform: String,
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
}

impl DesignBuilder {
    pub fn new(script: &Script, platform: &str) -> Self {
        Self {
            script: script.clone(),
            platform: platform.to_string(),
            name: None,
            version: None,
            description: None,
        }
    }

    /// Set the project name
    ///
    /// # Arguments
    /// * `name` - Project name; an empty name falls back to the platform
    ///
    /// # Returns
    /// The builder with the name set
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn create(self) -> Result<Design> {
        let design = Design {
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| self.platform.clone()),
            script: self.script,
            platform: self.platform,
            version: self.version,
            description: self.description,
        };

        for command in design.commands() {
            design.script.emit(&command)?;
        }
        Ok(design)
    }
}

/// Root scope of a script
#[derive(Debug, Clone)]
pub struct Design {
    script: Script,
    platform: String,
    name: String,
    version: Option<String>,
    description: Option<String>,
}

impl Design {
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Header commands, in emission order
    pub fn commands(&self) -> Vec<String> {
        vec![
            format!("CreateDesign \"{}\" \"{}\"", self.name, self.platform),
            format!("SetDesignProperty \"ProjectName\" \"{}\"", self.name),
            format!(
                "SetDesignProperty \"Version\" \"{}\"",
                self.version.as_deref().unwrap_or("")
            ),
            format!(
                "SetDesignProperty \"Description\" \"{}\"",
                self.description.as_deref().unwrap_or("")
            ),
        ]
    }
}

impl Scope for Design {
    fn path(&self) -> &str {
        DESIGN_ROOT
    }

    fn script(&self) -> &Script {
        &self.script
    }
}
