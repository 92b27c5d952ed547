/*!
# Instruction Set

Programs are plain text. Only the sixteen characters below are
instructions; everything else is a comment and is discarded when the
program loads.

Every cell is an unsigned 16-bit number. Arithmetic wraps, so `-` on
a zero cell gives 65535 and `+` on 65535 gives zero.

| Char | Effect |
|------|--------|
| `>`  | Move to the next cell on the current page. |
| `<`  | Move to the previous cell on the current page. |
| `+`  | Increment the current cell. |
| `-`  | Decrement the current cell. |
| `[`  | If the current cell is zero, continue after the matching `]`. |
| `]`  | If the current cell is not zero, continue after the matching `[`. |
| `.`  | Write the current cell to the output tape at the register address. |
| `,`  | Read the input tape at the register address into the current cell. |
| `@`  | Move to the offset held in the current cell. |
| `^`  | Copy the current cell into the register. |
| `*`  | Copy the register into the current cell. |
| `~`  | Rotate the current cell right by one bit. |
| `&`  | Replace the current cell with NOT (cell AND register). |
| `#`  | Switch to the page held in the current cell, keeping the offset. |
| `}`  | Switch to the next page. |
| `{`  | Switch to the previous page. |

## Memory

The data pointer is a page and an offset. `>` and `<` wrap around
inside the page; they never spill into the neighbouring page. `}` and
`{` wrap around the 65536 pages. Pages cost nothing until a cell on
them is written.

## Peripheral tapes

The register is the only way to address the tapes. Reading past the end
of the input tape yields zero. Writing to the output tape replaces what
was previously written at the same address.

## Example

Copy the input tape to the output tape until a zero is read.
Cell 0 counts the address and cell 1 carries the data.

```text
>,[.<+^>,]
```

<pre><code>&nbsp;  $ bfvm --input-text Hello echo.bf
&nbsp;  Hello
</code></pre>

## Brackets

Brackets must balance. A program with a stray `[` or `]` is rejected
before anything runs:

<pre><code>&nbsp;  $ bfvm broken.bf
&nbsp;  unbalanced brackets at instruction 4 (column 9..10); no matching ]
</code></pre>
*/
