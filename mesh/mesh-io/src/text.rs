//! Plain text mesh format.
//!
//! A minimal line-oriented layout: a vertex block followed by a triangle
//! block, each preceded by its record count.
//!
//! ```text
//! <num_vertices>
//! <x0> <y0> <z0>
//! ...
//! <num_triangles>
//! <i0> <j0> <k0>
//! ...
//! ```
//!
//! Fields are whitespace separated. Coordinates are floating point; indices
//! are 0-based references into the vertex block. Every record line holds
//! exactly three fields and every count line exactly one. Counts must match
//! the records that follow: a short block is an [`IoError::UnexpectedEof`],
//! extra trailing records are an [`IoError::InvalidCount`]. Blank lines
//! after the last triangle are ignored.
//!
//! Coordinates are written with the shortest representation that parses
//! back to the same `f64`, so a write/read round trip is exact.
//!
//! # Example
//!
//! ```
//! use mesh_io::{format_text_mesh, parse_text_mesh};
//!
//! let text = "3\n0 0 0\n1 0 0\n0 1 0\n1\n0 1 2\n";
//! let mesh = parse_text_mesh(text).unwrap();
//! assert_eq!(mesh.vertices.len(), 3);
//! assert_eq!(mesh.faces, vec![[0, 1, 2]]);
//!
//! assert_eq!(format_text_mesh(&mesh).unwrap(), text);
//! ```

use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use mesh_types::{Face, IndexedMesh, Vertex};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Cursor over the input lines that tracks 1-based line numbers.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    /// Next line, or `UnexpectedEof` naming what was expected there.
    fn next_line(&mut self, expected: &'static str) -> IoResult<(usize, &'a str)> {
        self.line += 1;
        self.lines
            .next()
            .map(|text| (self.line, text))
            .ok_or(IoError::UnexpectedEof {
                line: self.line,
                expected,
            })
    }

    /// Number of remaining lines that are not blank.
    fn remaining_records(&mut self) -> usize {
        self.lines.by_ref().filter(|l| !l.trim().is_empty()).count()
    }
}

fn parse_field<T: FromStr>(token: &str, line: usize, kind: &'static str) -> IoResult<T> {
    token.parse().map_err(|_| IoError::InvalidNumber {
        line,
        token: token.to_string(),
        kind,
    })
}

fn parse_count(cursor: &mut LineCursor<'_>, expected: &'static str) -> IoResult<usize> {
    let (line, text) = cursor.next_line(expected)?;
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 1 {
        return Err(IoError::InvalidFieldCount {
            line,
            expected: 1,
            got: fields.len(),
        });
    }
    parse_field(fields[0], line, "count")
}

fn parse_triple<T: FromStr>(
    cursor: &mut LineCursor<'_>,
    expected: &'static str,
    kind: &'static str,
) -> IoResult<[T; 3]> {
    let (line, text) = cursor.next_line(expected)?;
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(IoError::InvalidFieldCount {
            line,
            expected: 3,
            got: fields.len(),
        });
    }
    Ok([
        parse_field(fields[0], line, kind)?,
        parse_field(fields[1], line, kind)?,
        parse_field(fields[2], line, kind)?,
    ])
}

fn check_indices(mesh: &IndexedMesh) -> IoResult<()> {
    match mesh.first_invalid_index() {
        Some((face, index)) => Err(IoError::IndexOutOfRange {
            face,
            index,
            vertex_count: mesh.vertices.len(),
        }),
        None => Ok(()),
    }
}

/// Parse a mesh from text.
///
/// # Errors
///
/// Returns a format error if the text does not follow the layout described
/// in the [module documentation](self), and [`IoError::IndexOutOfRange`] if
/// a triangle references a vertex outside the vertex block.
pub fn parse_text_mesh(text: &str) -> IoResult<IndexedMesh> {
    let mut cursor = LineCursor::new(text);

    let vertex_count = parse_count(&mut cursor, "vertex count")?;
    // Capacity is bounded by the input size so a corrupt count can't over-allocate.
    let mut mesh = IndexedMesh::with_capacity(vertex_count.min(text.len()), 0);
    for _ in 0..vertex_count {
        let [x, y, z] = parse_triple::<f64>(&mut cursor, "vertex record", "coordinate")?;
        mesh.vertices.push(Vertex::from_coords(x, y, z));
    }

    let face_count = parse_count(&mut cursor, "triangle count")?;
    mesh.faces.reserve(face_count.min(text.len()));
    for _ in 0..face_count {
        let face: Face = parse_triple(&mut cursor, "triangle record", "vertex index")?;
        mesh.faces.push(face);
    }

    let extra = cursor.remaining_records();
    if extra > 0 {
        return Err(IoError::InvalidCount {
            section: "triangle",
            declared: face_count,
            found: face_count + extra,
        });
    }

    check_indices(&mesh)?;
    Ok(mesh)
}

fn decode_utf8(bytes: Vec<u8>) -> IoResult<String> {
    String::from_utf8(bytes)
        .map_err(|e| IoError::invalid_content(format!("input is not valid UTF-8: {e}")))
}

/// Read a mesh in the text format from any reader.
///
/// # Errors
///
/// Returns [`IoError::Io`] if reading fails, [`IoError::InvalidContent`] if
/// the input is not UTF-8, and the errors of [`parse_text_mesh`] otherwise.
pub fn read_text_mesh<R: Read>(mut reader: R) -> IoResult<IndexedMesh> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_text_mesh(&decode_utf8(bytes)?)
}

/// Load a mesh from a text mesh file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, and the
/// errors of [`read_text_mesh`] otherwise.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_text_mesh;
///
/// let mesh = load_text_mesh("surface.txt").unwrap();
/// println!("Loaded {} triangles", mesh.faces.len());
/// ```
pub fn load_text_mesh<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = parse_text_mesh(&decode_utf8(bytes)?)?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Loaded text mesh"
    );
    Ok(mesh)
}

/// Write a mesh in the text format.
///
/// # Errors
///
/// Returns [`IoError::IndexOutOfRange`] before writing anything if a face
/// references a missing vertex, and [`IoError::Io`] if writing fails.
pub fn write_text_mesh<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    check_indices(mesh)?;

    writeln!(writer, "{}", mesh.vertices.len())?;
    for vertex in &mesh.vertices {
        let p = &vertex.position;
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    writeln!(writer, "{}", mesh.faces.len())?;
    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "{a} {b} {c}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Format a mesh in the text format into a string.
///
/// # Errors
///
/// Same as [`write_text_mesh`].
pub fn format_text_mesh(mesh: &IndexedMesh) -> IoResult<String> {
    let mut buf = Vec::new();
    write_text_mesh(mesh, &mut buf)?;
    decode_utf8(buf)
}

/// Save a mesh to a text mesh file.
///
/// The file is written next to the target under a temporary name and
/// renamed into place once complete, so a failed save never leaves a
/// partially written file at `path`.
///
/// # Errors
///
/// Returns [`IoError::IndexOutOfRange`] if a face references a missing
/// vertex, and [`IoError::Io`] if the file cannot be written or renamed.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_text_mesh, save_text_mesh};
///
/// let mesh = load_text_mesh("input.txt").unwrap();
/// save_text_mesh(&mesh, "output.txt").unwrap();
/// ```
pub fn save_text_mesh<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    write_text_mesh(mesh, BufWriter::new(temp.as_file_mut()))?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Saved text mesh"
    );
    Ok(())
}
