use sluice_core::{
    stmt::{Field, OrderField},
    Capability,
};

/// Emits SQL text one token at a time.
///
/// Tokens are separated by single spaces, so a statement built as
/// `select().fields(..).from().table_name(..).end()` renders as
/// `SELECT [A], [B] FROM [T] ;`. The builder only quotes and concatenates;
/// callers are responsible for validation and token order.
#[derive(Debug)]
pub struct QueryBuilder {
    capability: &'static Capability,
    text: String,
}

impl QueryBuilder {
    pub fn new(capability: &'static Capability) -> QueryBuilder {
        QueryBuilder {
            capability,
            text: String::new(),
        }
    }

    pub fn clear(&mut self) -> &mut Self {
        self.text.clear();
        self
    }

    /// Appends raw text as a token.
    pub fn write(&mut self, token: impl AsRef<str>) -> &mut Self {
        let token = token.as_ref();
        if token.is_empty() {
            return self;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(token);
        self
    }

    pub fn select(&mut self) -> &mut Self {
        self.write("SELECT")
    }

    pub fn top(&mut self, rows: i64) -> &mut Self {
        self.write(format!("TOP ({rows})"))
    }

    pub fn from(&mut self) -> &mut Self {
        self.write("FROM")
    }

    pub fn where_(&mut self) -> &mut Self {
        self.write("WHERE")
    }

    pub fn order_by(&mut self) -> &mut Self {
        self.write("ORDER BY")
    }

    pub fn insert_into(&mut self) -> &mut Self {
        self.write("INSERT INTO")
    }

    pub fn values(&mut self) -> &mut Self {
        self.write("VALUES")
    }

    pub fn update(&mut self) -> &mut Self {
        self.write("UPDATE")
    }

    pub fn set(&mut self) -> &mut Self {
        self.write("SET")
    }

    pub fn delete_from(&mut self) -> &mut Self {
        self.write("DELETE FROM")
    }

    pub fn open_paren(&mut self) -> &mut Self {
        self.write("(")
    }

    pub fn close_paren(&mut self) -> &mut Self {
        self.write(")")
    }

    /// `AS <alias>` with the alias quoted.
    pub fn as_(&mut self, alias: &str) -> &mut Self {
        let alias = self.quote(alias);
        self.write(format!("AS {alias}"))
    }

    pub fn end(&mut self) -> &mut Self {
        self.write(";")
    }

    pub fn table_name(&mut self, name: &str) -> &mut Self {
        let name = self.quote(name);
        self.write(name)
    }

    /// Table hints, written verbatim.
    pub fn hints(&mut self, hints: Option<&str>) -> &mut Self {
        match hints {
            Some(hints) => self.write(hints.trim()),
            None => self,
        }
    }

    /// `[A], [B], ...`, each optionally qualified by `alias.`.
    pub fn field_names(&mut self, fields: &[Field], alias: Option<&str>) -> &mut Self {
        let text = self.join(fields, |b, field| {
            let name = b.quote(field.name());
            match alias {
                Some(alias) => format!("{alias}.{name}"),
                None => name,
            }
        });
        self.write(text)
    }

    /// `@A, @B, ...`, each suffixed `_{index}` when batching.
    pub fn parameters(&mut self, fields: &[Field], index: Option<usize>) -> &mut Self {
        let text = self.join(fields, |b, field| b.parameter(field, index));
        self.write(text)
    }

    /// `@A AS [A], @B AS [B], ...`
    pub fn parameters_as_fields(&mut self, fields: &[Field], index: Option<usize>) -> &mut Self {
        let text = self.join(fields, |b, field| {
            format!("{} AS {}", b.parameter(field, index), b.quote(field.name()))
        });
        self.write(text)
    }

    /// `[A] = @A, [B] = @B, ...`
    pub fn fields_and_parameters(&mut self, fields: &[Field], index: Option<usize>) -> &mut Self {
        let text = self.join(fields, |b, field| {
            format!("{} = {}", b.quote(field.name()), b.parameter(field, index))
        });
        self.write(text)
    }

    /// `L.[A] = R.[A], ...`
    pub fn fields_and_aliased_fields(
        &mut self,
        fields: &[Field],
        left: &str,
        right: &str,
    ) -> &mut Self {
        let text = self.join(fields, |b, field| {
            let name = b.quote(field.name());
            format!("{left}.{name} = {right}.{name}")
        });
        self.write(text)
    }

    /// `[A] ASC, [B] DESC, ...`
    pub fn order_by_fields(&mut self, fields: &[OrderField]) -> &mut Self {
        let text = fields
            .iter()
            .map(|field| format!("{} {}", self.quote(field.name()), field.order().sql_text()))
            .collect::<Vec<_>>()
            .join(", ");
        self.write(text)
    }

    pub fn limit(&mut self, offset: i64, count: i64) -> &mut Self {
        self.write(format!("LIMIT {offset}, {count}"))
    }

    pub fn offset_fetch(&mut self, offset: i64, count: i64) -> &mut Self {
        self.write(format!("OFFSET {offset} ROWS FETCH NEXT {count} ROWS ONLY"))
    }

    /// Quotes an identifier, quoting each `.`-separated part separately.
    pub fn quote(&self, name: &str) -> String {
        let Capability {
            open_quote,
            close_quote,
            ..
        } = *self.capability;

        name.split('.')
            .map(|part| {
                let part: String = part
                    .trim()
                    .chars()
                    .filter(|c| !matches!(c, '[' | ']' | '"' | '`'))
                    .collect();
                format!("{open_quote}{part}{close_quote}")
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The parameter token for a field, suffixed `_{index}` when batching.
    pub fn parameter(&self, field: &Field, index: Option<usize>) -> String {
        self.parameter_named(&field.parameter_name(), index)
    }

    pub fn parameter_named(&self, name: &str, index: Option<usize>) -> String {
        let prefix = self.capability.parameter_prefix;
        match index {
            Some(index) => format!("{prefix}{name}_{index}"),
            None => format!("{prefix}{name}"),
        }
    }

    fn join(&self, fields: &[Field], f: impl Fn(&Self, &Field) -> String) -> String {
        fields
            .iter()
            .map(|field| f(self, field))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn build(&self) -> String {
        self.text.clone()
    }
}
